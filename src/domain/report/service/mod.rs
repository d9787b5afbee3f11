//! The report shapers: one source per dashboard report variant.

pub mod distribution;
pub mod events;
pub mod legend;
pub mod states;
pub mod time_spans;

/// Top-N reports never return more than this many objects.
pub const TOP_RESULT_LIMIT: usize = 5;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::core::client::dms::DmsClient;
    use crate::core::client::messages::{
        AlarmCountResponse, AlarmDistributionRequest, AlarmDistributionResponse,
        AlarmStateResponse, ElementInfo, ServiceInfo, TopAlarmRequest,
    };
    use crate::domain::report::planner::QueryPlan;
    use crate::errors::ReportError;

    /// In-memory stand-in for the monitoring backend.
    #[derive(Default)]
    pub struct MockDms {
        pub series: HashMap<QueryPlan, AlarmDistributionResponse>,
        pub counts: Vec<AlarmCountResponse>,
        pub states: Vec<AlarmStateResponse>,
        pub elements: HashMap<(i32, i32), String>,
        pub services: HashMap<(i32, i32), String>,
        pub fail: bool,
        pub distribution_requests: Mutex<Vec<AlarmDistributionRequest>>,
        pub top_requests: Mutex<Vec<TopAlarmRequest>>,
    }

    impl MockDms {
        pub fn failing() -> Self {
            MockDms {
                fail: true,
                ..MockDms::default()
            }
        }

        pub fn with_series(mut self, plan: QueryPlan, labels: Vec<&str>, values: Vec<f64>) -> Self {
            self.series.insert(
                plan,
                AlarmDistributionResponse {
                    labels: labels.into_iter().map(String::from).collect(),
                    values,
                },
            );
            self
        }

        pub fn with_element(mut self, agent_id: i32, element_id: i32, name: &str) -> Self {
            self.elements
                .insert((agent_id, element_id), name.to_string());
            self
        }

        pub fn with_service(mut self, agent_id: i32, service_id: i32, name: &str) -> Self {
            self.services
                .insert((agent_id, service_id), name.to_string());
            self
        }

        pub fn with_counts(mut self, counts: Vec<AlarmCountResponse>) -> Self {
            self.counts = counts;
            self
        }

        pub fn with_states(mut self, states: Vec<AlarmStateResponse>) -> Self {
            self.states = states;
            self
        }

        fn check_fail(&self) -> Result<(), ReportError> {
            if self.fail {
                Err(ReportError::Backend("connection refused".to_string()))
            } else {
                Ok(())
            }
        }

        pub fn distribution_request_count(&self) -> usize {
            self.distribution_requests.lock().unwrap().len()
        }
    }

    /// Shorthand for count rows in tests.
    pub fn count_row(
        agent_id: i32,
        object_id: i32,
        is_service: bool,
        buckets: [i64; 5],
    ) -> AlarmCountResponse {
        AlarmCountResponse {
            agent_id,
            object_id,
            is_service,
            amount_timeout: buckets[0],
            amount_warning: buckets[1],
            amount_minor: buckets[2],
            amount_major: buckets[3],
            amount_critical: buckets[4],
        }
    }

    pub fn state_row(
        agent_id: i32,
        object_id: i32,
        is_service: bool,
        buckets: [f64; 5],
    ) -> AlarmStateResponse {
        AlarmStateResponse {
            agent_id,
            object_id,
            is_service,
            percentage_timeout: buckets[0],
            percentage_warning: buckets[1],
            percentage_minor: buckets[2],
            percentage_major: buckets[3],
            percentage_critical: buckets[4],
        }
    }

    #[async_trait]
    impl DmsClient for MockDms {
        async fn alarm_distribution(
            &self,
            req: &AlarmDistributionRequest,
        ) -> Result<AlarmDistributionResponse, ReportError> {
            self.check_fail()?;
            self.distribution_requests.lock().unwrap().push(req.clone());
            self.series
                .get(&req.plan)
                .cloned()
                .ok_or_else(|| ReportError::Backend(format!("no series for {:?}", req.plan)))
        }

        async fn top_alarm_counts(
            &self,
            req: &TopAlarmRequest,
        ) -> Result<Vec<AlarmCountResponse>, ReportError> {
            self.check_fail()?;
            self.top_requests.lock().unwrap().push(req.clone());
            Ok(self.counts.clone())
        }

        async fn top_alarm_states(
            &self,
            req: &TopAlarmRequest,
        ) -> Result<Vec<AlarmStateResponse>, ReportError> {
            self.check_fail()?;
            self.top_requests.lock().unwrap().push(req.clone());
            Ok(self.states.clone())
        }

        async fn element_info(
            &self,
            agent_id: i32,
            element_id: i32,
        ) -> Result<ElementInfo, ReportError> {
            self.check_fail()?;
            self.elements
                .get(&(agent_id, element_id))
                .map(|name| ElementInfo { name: name.clone() })
                .ok_or_else(|| ReportError::NotFound(format!("element {agent_id}/{element_id}")))
        }

        async fn service_info(
            &self,
            agent_id: i32,
            service_id: i32,
        ) -> Result<ServiceInfo, ReportError> {
            self.check_fail()?;
            self.services
                .get(&(agent_id, service_id))
                .map(|name| ServiceInfo { name: name.clone() })
                .ok_or_else(|| ReportError::NotFound(format!("service {agent_id}/{service_id}")))
        }
    }
}
