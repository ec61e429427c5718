use super::{LeadResponse, LeadSubmission, LeadTransport, TransportError};

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        /// Posts with the browser's `fetch`.
        #[derive(Clone, Copy, Debug, Default)]
        pub struct FetchTransport;

        impl LeadTransport for FetchTransport {
            async fn post(
                &self,
                endpoint: &str,
                submission: &LeadSubmission,
            ) -> Result<LeadResponse, TransportError> {
                let response = gloo_net::http::Request::post(endpoint)
                    .json(submission)
                    .map_err(|error| TransportError::Network(error.to_string()))?
                    .send()
                    .await
                    .map_err(|error| TransportError::Network(error.to_string()))?;
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .map_err(|error| TransportError::Body(error.to_string()))?;
                Ok(LeadResponse { status, body })
            }
        }

        pub type DefaultTransport = FetchTransport;
    } else {
        /// Stands in for `fetch` when rendering on the server, where event
        /// handlers never run.
        #[derive(Clone, Copy, Debug, Default)]
        pub struct Unavailable;

        impl LeadTransport for Unavailable {
            async fn post(
                &self,
                _endpoint: &str,
                _submission: &LeadSubmission,
            ) -> Result<LeadResponse, TransportError> {
                Err(TransportError::Unavailable)
            }
        }

        pub type DefaultTransport = Unavailable;
    }
}
