/// Which parameter bag the revealed view-model receives on back navigation.
///
/// Forward navigation always passes the caller's bag; only the back
/// direction is a policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackParams {
    /// Hand over whatever the `go_back` caller supplied (default).
    CallerSupplied,

    /// Replay the bag stored when the revealed entry was first pushed,
    /// ignoring the caller's bag for the navigated-to hook.
    Original,
}

impl Default for BackParams {
    fn default() -> Self {
        BackParams::CallerSupplied
    }
}

/// Behavior configuration for a [`Navigator`](crate::Navigator).
///
/// Plain data, fixed at construction via
/// [`Navigator::with_config`](crate::Navigator::with_config).
#[derive(Debug, Clone, Default)]
pub struct NavigatorConfig {
    /// Parameter policy for back navigation.
    pub back_params: BackParams,
}

impl NavigatorConfig {
    pub fn new(back_params: BackParams) -> Self {
        Self { back_params }
    }
}
