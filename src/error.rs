use std::fmt;

macro_rules! define_errors {
    (
        $(wrap $variant:ident($ty:ty) => $label:expr),*;
        $(msg $msg_variant:ident => $msg_label:expr),*
        $(;)?
    ) => {
        #[derive(Debug)]
        pub enum WanderError {
            $($variant($ty),)*
            $($msg_variant(String),)*
        }

        impl fmt::Display for WanderError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(WanderError::$variant(err) => write!(f, "{}: {}", $label, err),)*
                    $(WanderError::$msg_variant(msg) => write!(f, "{}: {}", $msg_label, msg),)*
                }
            }
        }

        $(impl From<$ty> for WanderError {
            fn from(err: $ty) -> Self {
                WanderError::$variant(err)
            }
        })*
    };
}

define_errors! {
    wrap Io(std::io::Error)      => "Io error",
    wrap Toml(toml::de::Error)   => "Toml error",
    wrap Reqwest(reqwest::Error) => "Reqwest error";
    msg Config => "Config error",
    msg Fetch  => "Fetch error",
    msg Input  => "Input error",
    msg Logger => "Logger error"
}

impl std::error::Error for WanderError {}

pub type WanderResult<T> = std::result::Result<T, WanderError>;
