// src/domain/view_model.rs

use crate::domain::analysis::AnalysisResult;
use crate::domain::listing::{ListingQuery, PreScanResult};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Verification,
    Dashboard,
    Premium,
}

/// Everything one browser session sees. Replaced wholesale by `update`.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    pub view: View,
    pub query: Option<ListingQuery>,
    pub prescan: Option<PreScanResult>,
    pub analysis: Option<Arc<AnalysisResult>>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum Action {
    InputRejected(String),
    PreScanCompleted {
        query: ListingQuery,
        prescan: PreScanResult,
    },
    PreScanFailed {
        query: ListingQuery,
        message: String,
    },
    AnalysisCompleted(AnalysisResult),
    AnalysisFailed(String),
    ActivatePremium,
    ShowDashboard,
    Reset,
}

impl ViewModel {
    /// The view that can actually be rendered with the data at hand.
    pub fn effective_view(&self) -> View {
        match self.view {
            View::Verification if self.prescan.is_some() && self.query.is_some() => {
                View::Verification
            }
            View::Dashboard | View::Premium if self.analysis.is_some() => self.view,
            _ => View::Home,
        }
    }

    pub fn premium_active(&self) -> bool {
        self.view == View::Premium && self.analysis.is_some()
    }
}

/// The only way a view-model changes.
pub fn update(vm: ViewModel, action: Action) -> ViewModel {
    match action {
        Action::InputRejected(message) => ViewModel {
            view: View::Home,
            error: Some(message),
            ..vm
        },

        Action::PreScanCompleted { query, prescan } => ViewModel {
            view: View::Verification,
            query: Some(query),
            prescan: Some(prescan),
            analysis: None,
            error: None,
        },

        Action::PreScanFailed { query, message } => ViewModel {
            view: View::Home,
            query: Some(query),
            prescan: None,
            analysis: None,
            error: Some(message),
        },

        Action::AnalysisCompleted(result) => {
            if vm.prescan.is_none() {
                return vm;
            }
            ViewModel {
                view: View::Dashboard,
                analysis: Some(Arc::new(result)),
                error: None,
                ..vm
            }
        }

        Action::AnalysisFailed(message) => ViewModel {
            view: View::Verification,
            analysis: None,
            error: Some(message),
            ..vm
        },

        Action::ActivatePremium if vm.analysis.is_some() => ViewModel {
            view: View::Premium,
            ..vm
        },

        Action::ShowDashboard if vm.analysis.is_some() => ViewModel {
            view: View::Dashboard,
            ..vm
        },

        Action::ActivatePremium | Action::ShowDashboard => vm,

        Action::Reset => ViewModel {
            view: View::Home,
            query: vm.query,
            prescan: None,
            analysis: None,
            error: None,
        },
    }
}
