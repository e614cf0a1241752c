// SPDX-License-Identifier: Unlicense

//! Uniform structure for errors and results.

/// Specified errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Port or interrupt line is not part of this platform
    UnsupportedDevice,
    /// No divider table entry matches the requested clocks
    InvalidConfiguration,
    /// Collaborator could not hand out the requested instance
    DeviceNotFound,
    /// Collaborator probe of a DMA controller or DAI failed
    ProbeFailed,
    /// Collaborator subsystem failed to initialise
    InitFailed,
}

/// Negated errno values, as the firmware ABI reports them.
mod errno {
    pub const EIO: i32 = 5;
    pub const ENXIO: i32 = 6;
    pub const ENODEV: i32 = 19;
    pub const EINVAL: i32 = 22;
}

impl Error {
    /// Status code for callers speaking the firmware C ABI.
    pub const fn errno(self) -> i32 {
        match self {
            Self::UnsupportedDevice => -errno::ENODEV,
            Self::InvalidConfiguration => -errno::EINVAL,
            Self::DeviceNotFound => -errno::ENXIO,
            Self::ProbeFailed | Self::InitFailed => -errno::EIO,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Self::UnsupportedDevice => "unsupported device",
            Self::InvalidConfiguration => "invalid configuration",
            Self::DeviceNotFound => "device not found",
            Self::ProbeFailed => "probe failed",
            Self::InitFailed => "initialisation failed",
        };
        f.write_str(text)
    }
}

/// Default error type for platform functions.
pub type Result<T> = core::result::Result<T, Error>;

/// Collapse a result into the status code returned over the C ABI.
pub fn status<T>(result: Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.errno(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_values() {
        assert_eq!(Error::UnsupportedDevice.errno(), -19);
        assert_eq!(Error::InvalidConfiguration.errno(), -22);
        assert_eq!(Error::DeviceNotFound.errno(), -6);
        assert_eq!(Error::ProbeFailed.errno(), -5);
    }

    #[test]
    fn return_error() {
        fn fn_ok() -> Result<u32> {
            Ok(1)
        }

        fn fn_error() -> Result<u32> {
            Err(Error::InvalidConfiguration)
        }

        fn fn_qmark() -> Result<u32> {
            fn_error()?;
            Ok(1)
        }

        assert_ok_eq!(fn_ok(), 1);
        assert_err!(fn_error());
        assert_err!(fn_qmark());
        assert_eq!(status(fn_ok()), 0);
        assert_eq!(status(fn_qmark()), -22);
    }
}
