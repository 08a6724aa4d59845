//! Wrapper type for safe pointers to static memory.

use core::fmt;
use core::ops::Deref;

/// A pointer to statically allocated mutable data such as memory mapped I/O
/// registers.
///
/// This is a simple wrapper around a raw pointer that encapsulates an unsafe
/// dereference in a safe manner. It serve the role of creating a `&'static T`
/// given a raw address and acts similarly to `extern` definitions, except
/// `StaticRef` is subject to module and crate boundaries, while `extern`
/// definitions can be imported anywhere.
pub struct StaticRef<T> {
    ptr: *const T,
}

impl<T> StaticRef<T> {
    /// Create a new `StaticRef` from a raw pointer
    ///
    /// ## Safety
    ///
    /// Callers must pass in a reference to statically allocated memory which
    /// does not overlap with other values.
    pub const unsafe fn new(ptr: *const T) -> StaticRef<T> {
        StaticRef { ptr: ptr }
    }

    /// The address this reference points at.
    pub fn address(&self) -> usize {
        self.ptr as usize
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        StaticRef { ptr: self.ptr }
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> PartialEq for StaticRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for StaticRef<T> {}

impl<T> Deref for StaticRef<T> {
    type Target = T;
    fn deref(&self) -> &T {
        unsafe { &*self.ptr }
    }
}

impl<T> fmt::Debug for StaticRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "StaticRef({:#010x})", self.address())
    }
}

impl<T> fmt::Pointer for StaticRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Pointer::fmt(&self.ptr, f)
    }
}

// Register blocks are only accessed through volatile cells.
unsafe impl<T> Sync for StaticRef<T> {}
unsafe impl<T> Send for StaticRef<T> {}

#[cfg(test)]
mod tests {
    use super::StaticRef;

    #[repr(C)]
    struct Block {
        word: u32,
    }

    #[test]
    fn address_is_preserved() {
        let r: StaticRef<Block> = unsafe { StaticRef::new(0x4003_B000 as *const Block) };
        assert_eq!(r.address(), 0x4003_B000);
        let copy = r;
        assert_eq!(copy, r);
    }

    #[test]
    fn deref_reads_backing_memory() {
        static BLOCK: Block = Block { word: 0xdead_beef };
        let r = unsafe { StaticRef::new(&BLOCK as *const Block) };
        assert_eq!(r.word, 0xdead_beef);
    }

    fn first_word<T>(r: &StaticRef<T>) -> u32
    where
        T: AsRef<u32>,
    {
        *(**r).as_ref()
    }

    impl AsRef<u32> for Block {
        fn as_ref(&self) -> &u32 {
            &self.word
        }
    }

    #[test]
    fn deref_in_generic_context() {
        static BLOCK: Block = Block { word: 0x4006_A000 };
        let r = unsafe { StaticRef::new(&BLOCK as *const Block) };
        assert_eq!(first_word(&r), 0x4006_A000);
    }
}
