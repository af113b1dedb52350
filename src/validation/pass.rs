//! Per-call accumulator for a validator.
//!
//! A [`ValidationPass`] is created fresh inside every `validate()` call and
//! consumed by [`ValidationPass::finish`], so validators keep no mutable state
//! between calls and re-running a validator never repeats messages.

use super::merge::merge;
use super::types::{ValidationMessage, ValidationResult, ValidationType};

/// Status of one probed aspect (e.g. "xcode", "cocoapods") within a pass.
///
/// The only legal path is `Missing -> Installed -> Partial`. An aspect that
/// was found absent stays `Missing`, and a degraded aspect never recovers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aspect {
    name: &'static str,
    status: ValidationType,
}

impl Aspect {
    /// New aspect, `Missing` until its presence probe succeeds.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            status: ValidationType::Missing,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn status(&self) -> ValidationType {
        self.status
    }

    /// Presence probe succeeded.
    pub fn mark_present(&mut self) {
        debug_assert_eq!(
            self.status,
            ValidationType::Missing,
            "aspect '{}' marked present twice",
            self.name
        );
        if self.status == ValidationType::Missing {
            self.status = ValidationType::Installed;
        }
    }

    /// A secondary check failed. Sticky at `Partial`.
    pub fn degrade(&mut self) {
        debug_assert_ne!(
            self.status,
            ValidationType::Missing,
            "aspect '{}' degraded before its presence probe passed",
            self.name
        );
        if self.status == ValidationType::Installed {
            self.status = ValidationType::Partial;
        }
    }
}

/// Handle to an aspect registered on a [`ValidationPass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectId(usize);

/// Accumulates aspect statuses, messages and summary for one validation.
#[derive(Debug, Default)]
pub struct ValidationPass {
    aspects: Vec<Aspect>,
    messages: Vec<ValidationMessage>,
    summary: Option<String>,
}

impl ValidationPass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an aspect. Aspects are merged in registration order.
    pub fn aspect(&mut self, name: &'static str) -> AspectId {
        self.aspects.push(Aspect::new(name));
        AspectId(self.aspects.len() - 1)
    }

    /// Presence probe failed: the aspect stays `Missing` and gets one error.
    pub fn absent(&mut self, id: AspectId, message: impl Into<String>) {
        tracing::debug!(aspect = self.aspects[id.0].name(), "aspect missing");
        self.messages.push(ValidationMessage::error(message));
    }

    /// Presence probe succeeded: the aspect becomes `Installed` with an
    /// informational message.
    pub fn present(&mut self, id: AspectId, message: impl Into<String>) {
        self.aspects[id.0].mark_present();
        self.messages.push(ValidationMessage::info(message));
    }

    /// Presence probe succeeded, with the message left to a later check.
    pub fn mark_present(&mut self, id: AspectId) {
        self.aspects[id.0].mark_present();
    }

    /// A secondary check failed: the aspect drops to `Partial` and the
    /// remediation is recorded as an error.
    pub fn degrade(&mut self, id: AspectId, message: impl Into<String>) {
        let aspect = &mut self.aspects[id.0];
        aspect.degrade();
        tracing::debug!(aspect = aspect.name(), "aspect degraded");
        self.messages.push(ValidationMessage::error(message));
    }

    /// Add an informational message without touching any status.
    pub fn info(&mut self, message: impl Into<String>) {
        self.messages.push(ValidationMessage::info(message));
    }

    /// Free-text summary; not part of the merge.
    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }

    pub fn status(&self, id: AspectId) -> ValidationType {
        self.aspects[id.0].status()
    }

    /// Merge every aspect into the final result.
    ///
    /// # Panics
    ///
    /// Panics if no aspect was registered.
    pub fn finish(self) -> ValidationResult {
        let statuses: Vec<ValidationType> = self.aspects.iter().map(Aspect::status).collect();
        ValidationResult::new(merge(&statuses), self.messages, self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_starts_missing() {
        assert_eq!(Aspect::new("xcode").status(), ValidationType::Missing);
    }

    #[test]
    fn aspect_degrades_from_installed_to_partial() {
        let mut aspect = Aspect::new("xcode");
        aspect.mark_present();
        assert_eq!(aspect.status(), ValidationType::Installed);
        aspect.degrade();
        assert_eq!(aspect.status(), ValidationType::Partial);
    }

    #[test]
    fn partial_is_sticky() {
        let mut aspect = Aspect::new("xcode");
        aspect.mark_present();
        aspect.degrade();
        aspect.degrade();
        assert_eq!(aspect.status(), ValidationType::Partial);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "degraded before its presence probe passed")]
    fn degrading_missing_aspect_is_a_contract_violation() {
        Aspect::new("xcode").degrade();
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "marked present twice")]
    fn marking_present_twice_is_a_contract_violation() {
        let mut aspect = Aspect::new("xcode");
        aspect.mark_present();
        aspect.degrade();
        aspect.mark_present();
    }

    #[test]
    fn pass_keeps_message_order() {
        let mut pass = ValidationPass::new();
        let xcode = pass.aspect("xcode");
        let pods = pass.aspect("cocoapods");
        pass.present(xcode, "Xcode found");
        pass.degrade(xcode, "Xcode too old");
        pass.absent(pods, "CocoaPods not installed");

        let result = pass.finish();
        let texts: Vec<&str> = result.messages().iter().map(|m| m.text()).collect();
        assert_eq!(
            texts,
            vec!["Xcode found", "Xcode too old", "CocoaPods not installed"]
        );
        assert_eq!(result.overall(), ValidationType::Partial);
    }

    #[test]
    fn pass_merges_all_aspects() {
        let mut pass = ValidationPass::new();
        let a = pass.aspect("a");
        let b = pass.aspect("b");
        pass.present(a, "a found");
        pass.present(b, "b found");
        assert_eq!(pass.status(a), ValidationType::Installed);
        assert_eq!(pass.finish().overall(), ValidationType::Installed);
    }

    #[test]
    fn summary_does_not_affect_status() {
        let mut pass = ValidationPass::new();
        let a = pass.aspect("a");
        pass.absent(a, "a missing");
        pass.set_summary("15.2");
        let result = pass.finish();
        assert_eq!(result.overall(), ValidationType::Missing);
        assert_eq!(result.summary(), Some("15.2"));
    }

    #[test]
    #[should_panic(expected = "merge called with no statuses")]
    fn finishing_without_aspects_panics() {
        ValidationPass::new().finish();
    }
}
