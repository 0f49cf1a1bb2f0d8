use std::ptr;

#[allow(dead_code)]
struct Probe(usize);

trait Erased {
    fn probe(&self) -> bool {
        true
    }
}

impl Erased for Probe {}

fn layout_broken(what: &str) {
    panic!(
        concat!(
            "Assumptions on layout are broken: this crate rebases fat ",
            "pointers relying on the `unsafe code guidelines` layout ",
            "specification, and the layout of {:?} no longer matches it. ",
            "Please report this on github."
        ),
        what
    );
}

/// Checks that the address half of a fat pointer is its first word, for the
/// two fat pointer kinds the crate rebases:
///
/// 1. trait object pointers (address, then vtable)
/// 2. slice pointers (address, then length)
fn check_fat_pointer_layout() {
    {
        #[repr(C)]
        struct TraitObject {
            addr: *const u8,
            vtable: *const u8,
        }

        let probe = Box::new(Probe(100));
        let addr = Box::into_raw(probe);

        let erased: *const dyn Erased = addr;
        let repr: TraitObject = unsafe { ptr::read(ptr::addr_of!(erased) as *const TraitObject) };

        if repr.addr != addr as *const u8 {
            layout_broken("trait objects");
        }
        let probe = unsafe { Box::from_raw(addr) };
        probe.probe();
    }

    {
        let array = [1u8, 2, 3];
        let slice: &[u8] = &array;

        #[repr(C)]
        struct Slice {
            addr: *const u8,
            len: usize,
        }

        let repr: Slice = unsafe { ptr::read(ptr::addr_of!(slice) as *const Slice) };

        if repr.addr != slice.as_ptr() || repr.len != slice.len() {
            layout_broken("slices");
        }
    }
}

fn main() {
    // NOTE: this cannot catch every possible mismatch: the host layout may
    // differ from the target layout, and future fat pointer kinds are not
    // probed. It exists to fail fast on the common configurations.
    check_fat_pointer_layout();
}
