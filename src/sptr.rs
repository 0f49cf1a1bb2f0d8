#[cfg(feature = "nightly")]
mod implementation {
    /// Moves a (possibly fat) pointer onto a new address, keeping its
    /// metadata.
    pub fn rebase<T: ?Sized>(ptr: *const T, addr: *mut u8) -> *mut T {
        addr.with_metadata_of(ptr)
    }
}

#[cfg(not(feature = "nightly"))]
#[allow(clippy::as_conversions)]
mod implementation {
    use core::ptr::addr_of_mut;

    /// Moves a (possibly fat) pointer onto a new address, keeping its
    /// metadata.
    ///
    /// Relies on the address half of a fat pointer being its first word;
    /// `build.rs` checks that assumption before the crate is compiled.
    pub fn rebase<T: ?Sized>(ptr: *const T, addr: *mut u8) -> *mut T {
        let mut fat = ptr;
        let fat_addr = addr_of_mut!(fat).cast::<usize>();
        unsafe { fat_addr.write(addr as usize) }
        fat.cast_mut()
    }
}

pub use implementation::*;
