#![allow(unused, reason = "logger")]

// Arguments must implement both `Display` and `defmt::Format`; format
// strings stick to plain `{}` placeholders.

macro_rules! info {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::info!($($tt)*);
        #[cfg(feature = "defmt")]
        ::defmt::info!($($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!($($tt)*);
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($tt)*);
    };
}

macro_rules! error {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::error!($($tt)*);
        #[cfg(feature = "defmt")]
        ::defmt::error!($($tt)*);
    };
}

pub(crate) use {debug, error, info, warning};
