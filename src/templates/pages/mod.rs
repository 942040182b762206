pub mod dashboard;
pub mod home;
pub mod legal;
pub mod premium;
pub mod verification;

pub use dashboard::dashboard_page;
pub use home::home_page;
pub use legal::legal_page;
pub use premium::premium_page;
pub use verification::verification_page;

use crate::domain::{View, ViewModel};
use maud::Markup;

/// The page for whatever the session is currently looking at.
pub fn page_for(vm: &ViewModel) -> Markup {
    let error = vm.error.as_deref();

    match (vm.effective_view(), &vm.query, &vm.prescan, &vm.analysis) {
        (View::Verification, Some(query), Some(prescan), _) => {
            verification_page(query, prescan, error)
        }
        (View::Dashboard, _, _, Some(analysis)) => dashboard_page(analysis),
        (View::Premium, _, _, Some(analysis)) => premium_page(analysis),
        _ => home_page(vm.query.as_ref(), error),
    }
}
