//! Navigation capability
//!
//! Components never talk to a router directly. They ask the [`Navigation`]
//! handle found in context to go to a path, and whoever mounted the
//! components decides what that means: the desktop shell pushes a router
//! route, tests record the call.
//!
//! ## Usage
//!
//! ```ignore
//! // In a parent component
//! provide_navigation(Navigation::new(MyRouterBridge::new(use_navigator())));
//!
//! // In child components
//! let navigation = use_navigation();
//! navigation.go(NavTarget::BuddyFinder);
//! ```

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::Icon;

/// Something that can move the application to a path.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

impl<N: Navigate + ?Sized> Navigate for Rc<N> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

/// Feature pages reachable from the dashboard's navigation buttons
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NavTarget {
    BuddyFinder,
    ExerciseCounter,
    FormAnalysis,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [
        NavTarget::BuddyFinder,
        NavTarget::ExerciseCounter,
        NavTarget::FormAnalysis,
    ];

    /// Fixed destination path
    pub fn path(&self) -> &'static str {
        match self {
            NavTarget::BuddyFinder => "/buddy-finder",
            NavTarget::ExerciseCounter => "/exercise-counter",
            NavTarget::FormAnalysis => "/form-analysis",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::BuddyFinder => "Find Workout Buddy",
            NavTarget::ExerciseCounter => "Exercise Counter",
            NavTarget::FormAnalysis => "Form Analysis",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            NavTarget::BuddyFinder => Icon::Users,
            NavTarget::ExerciseCounter => Icon::Dumbbell,
            NavTarget::FormAnalysis => Icon::Camera,
        }
    }

    /// Path without the leading slash, used for CSS modifiers
    pub fn slug(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

/// Shared handle to the navigation capability.
///
/// Cheap to clone; all clones forward to the same [`Navigate`] impl.
#[derive(Clone)]
pub struct Navigation {
    inner: Rc<dyn Navigate>,
}

impl Navigation {
    pub fn new(navigate: impl Navigate + 'static) -> Self {
        Self {
            inner: Rc::new(navigate),
        }
    }

    /// Navigate to one of the fixed feature targets
    pub fn go(&self, target: NavTarget) {
        self.push(target.path());
    }

    /// Navigate to an arbitrary path
    pub fn push(&self, path: &str) {
        tracing::debug!(path, "navigating");
        self.inner.navigate(path);
    }
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation").finish_non_exhaustive()
    }
}

/// Hook to make a navigation handle available to all child components.
pub fn provide_navigation(navigation: Navigation) -> Navigation {
    use_context_provider(move || navigation)
}

/// Hook to access the navigation handle from context.
///
/// Panics if no ancestor called [`provide_navigation`].
pub fn use_navigation() -> Navigation {
    use_context::<Navigation>()
}
