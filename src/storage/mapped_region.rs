use log::{debug, warn};
use std::io;
use std::ptr;

/// Page-backed memory a ring can borrow as its storage.
///
/// The mapping is private and anonymous: it starts zero-filled, is never
/// shared with another process and disappears on drop.
pub struct MappedRegion {
    mmap_ptr: *mut u8,
    mmap_len: usize,
    len: usize,
    locked: bool,
}

impl MappedRegion {
    /// Maps at least `len` bytes, rounded up to whole pages.
    pub fn anonymous(len: usize) -> io::Result<Self> {
        if len == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "region length must be non-zero",
            ));
        }

        let page = page_size();
        let mmap_len = len.div_ceil(page) * page;

        let mmap_ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                mmap_len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if mmap_ptr == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }

        debug!("mapped {} bytes for a {} byte region", mmap_len, len);

        Ok(Self {
            mmap_ptr: mmap_ptr as *mut u8,
            mmap_len,
            len,
            locked: false,
        })
    }

    /// Pins the region in RAM so ring traffic never page-faults.
    pub fn lock(&mut self) -> io::Result<()> {
        if self.locked {
            return Ok(());
        }

        let result = unsafe { libc::mlock(self.mmap_ptr as *const libc::c_void, self.mmap_len) };

        if result == 0 {
            self.locked = true;
            debug!("locked {} bytes", self.mmap_len);
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Usable length, as requested at creation.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes actually mapped, a whole number of pages.
    #[inline]
    pub fn mapped_len(&self) -> usize {
        self.mmap_len
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.mmap_ptr, self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.mmap_ptr, self.len) }
    }
}

impl Drop for MappedRegion {
    fn drop(&mut self) {
        let result = unsafe { libc::munmap(self.mmap_ptr as *mut libc::c_void, self.mmap_len) };

        if result != 0 {
            warn!("munmap failed: {}", io::Error::last_os_error());
        } else {
            debug!("unmapped {} bytes", self.mmap_len);
        }
    }
}

unsafe impl Send for MappedRegion {}

fn page_size() -> usize {
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size > 0 { size as usize } else { 4096 }
}
