use crate::error::Result;

/// Display-bound view data.
///
/// Every assignment and every loading-flag change bumps `revision`; the run
/// loop redraws when the revision it last drew differs.
#[derive(Debug, Default)]
pub struct Bound<T> {
    value: T,
    loading: bool,
    revision: u64,
}

impl<T: Default> Bound<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.bump();
    }

    /// Back to the empty value of `T`.
    pub fn reset(&mut self) {
        self.set(T::default());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn begin_load(&mut self) {
        if !self.loading {
            self.loading = true;
            self.bump();
        }
    }

    /// Run `fetch` with the loading flag raised. The flag drops again whether
    /// or not `fetch` succeeds; on failure the current value is kept.
    pub fn load_with<F>(&mut self, fetch: F) -> Result<()>
    where
        F: FnOnce() -> Result<T>,
    {
        self.begin_load();
        let fetched = fetch();
        self.loading = false;
        let result = fetched.map(|value| self.value = value);
        self.bump();
        result
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
