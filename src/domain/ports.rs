//! Port traits implemented by the infrastructure layer.

/// Read-only key/value configuration source.
///
/// The process environment is captured once into an implementation of this
/// trait and passed to the reporter, so checks never read `std::env` ad hoc
/// and tests can supply a fake.
pub trait EnvSource {
    /// Value for `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
