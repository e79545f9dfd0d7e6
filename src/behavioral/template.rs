//! # Template method: fixed skeleton, deferred steps.
//!
//! [`Workday::work`] is the skeleton: it fixes the order of the morning
//! routine and delegates the details to the implementor's hook methods.
//! Implementors override the hooks, never the skeleton.

/// An employee's morning, as a skeleton with deferred steps.
pub trait Workday {
    /// Employee name; used by the provided steps.
    fn name(&self) -> &str;

    /// Hook: how this employee gets ready.
    fn prepare_to_work(&self) -> String;

    /// Hook: who this employee checks in with.
    fn talk_with_team_lead(&self) -> String;

    /// Provided step shared by all employees.
    fn enter_the_office(&self) -> String {
        format!("{} enters an office", self.name())
    }

    /// Template method: the fixed routine. Not meant to be overridden.
    fn work(&self) -> Vec<String> {
        vec![
            self.enter_the_office(),
            self.prepare_to_work(),
            self.talk_with_team_lead(),
        ]
    }
}

/// A developer's rendition of the routine.
pub struct Developer {
    name: String,
}

impl Developer {
    /// Creates a developer with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Workday for Developer {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare_to_work(&self) -> String {
        "Make coffee and start PC".to_string()
    }

    fn talk_with_team_lead(&self) -> String {
        "Go to talk with C.J.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Minimalist;

    impl Workday for Minimalist {
        fn name(&self) -> &str {
            "Sam"
        }

        fn prepare_to_work(&self) -> String {
            "Open laptop".to_string()
        }

        fn talk_with_team_lead(&self) -> String {
            "Wave".to_string()
        }
    }

    #[test]
    fn test_skeleton_fixes_step_order() {
        let dev = Developer::new("Nathan");
        assert_eq!(
            dev.work(),
            vec![
                "Nathan enters an office",
                "Make coffee and start PC",
                "Go to talk with C.J.",
            ]
        );
    }

    #[test]
    fn test_hooks_vary_per_implementor() {
        let routine = Minimalist.work();
        assert_eq!(routine[0], "Sam enters an office");
        assert_eq!(routine[1], "Open laptop");
        assert_eq!(routine[2], "Wave");
    }
}
