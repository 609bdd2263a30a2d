use enum_dispatch::enum_dispatch;
use shared::order::CartDraft;

/// A single cart transition
///
/// Appliers are PURE: no I/O, no clock, no failure. Malformed numeric
/// input is normalised inside the applier instead of being rejected.
#[enum_dispatch]
pub trait CartApplier {
    fn apply(&self, draft: &mut CartDraft);
}
