use std::{
    io,
    mem::MaybeUninit,
    os::fd::{AsRawFd, RawFd},
};

/// Turns off echo and line buffering until dropped.
pub struct RawMode {
    fd: RawFd,
    original: libc::termios,
}

impl RawMode {
    pub fn enable(fd: &impl AsRawFd) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let mut termios = MaybeUninit::uninit();

        let original = unsafe {
            if libc::tcgetattr(fd, termios.as_mut_ptr()) != 0 {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    "Error calling tcgetattr",
                ));
            }

            termios.assume_init()
        };

        let mut raw = original;
        raw.c_lflag &= !(libc::ECHO | libc::ICANON);

        unsafe {
            if libc::tcsetattr(fd, libc::TCSADRAIN, &raw) != 0 {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    "Error calling tcsetattr",
                ));
            }
        }

        Ok(Self { fd, original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSADRAIN, &self.original);
        }
    }
}
