use std::sync::Arc;

use crate::core::client::dms::HttpDmsClient;
use crate::domain::report::args::ReportArguments;
use crate::domain::report::service::distribution::DistributionSource;
use crate::domain::report::service::events::EventsSource;
use crate::domain::report::service::legend::LegendSource;
use crate::domain::report::service::states::StatesSource;
use crate::domain::report::service::time_spans::TimeSpansSource;

/// Shared, immutable application state: the argument catalog is built
/// once here and every report source holds a reference to it.
#[derive(Clone)]
pub struct AppState {
    pub arguments: Arc<ReportArguments>,
    pub distribution: Arc<DistributionSource<HttpDmsClient>>,
    pub legend: Arc<LegendSource>,
    pub events: Arc<EventsSource<HttpDmsClient>>,
    pub states: Arc<StatesSource<HttpDmsClient>>,
    pub time_spans: Arc<TimeSpansSource>,
}

pub fn build_app_state(dms: Arc<HttpDmsClient>) -> AppState {
    let arguments = Arc::new(ReportArguments::new());
    AppState {
        arguments: arguments.clone(),
        distribution: Arc::new(DistributionSource::new(dms.clone(), arguments.clone())),
        legend: Arc::new(LegendSource::new(arguments.clone())),
        events: Arc::new(EventsSource::new(dms.clone(), arguments.clone())),
        states: Arc::new(StatesSource::new(dms, arguments)),
        time_spans: Arc::new(TimeSpansSource),
    }
}
