use crate::constants::{S_ADD_SINGLETON_LIST_IDIOM, S_LIST_APPEND_METHOD};
use std::fmt;

/// The two ways a word list can be grown one token at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendStrategy {
    /// `list.append(x)`: push the token directly.
    PushMethod,
    /// `t += [x]`: wrap the token in a singleton list, then extend with it.
    ExtendSingleton,
}

impl fmt::Display for AppendStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppendStrategy::PushMethod => write!(f, "{}", S_LIST_APPEND_METHOD),
            AppendStrategy::ExtendSingleton => write!(f, "{}", S_ADD_SINGLETON_LIST_IDIOM),
        }
    }
}
