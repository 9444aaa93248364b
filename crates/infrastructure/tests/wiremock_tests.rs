//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - NextBus adapter against a mocked feed
//! - Full command flow from text to posted direct message

use std::sync::{Arc, Mutex};

use application::{
    ApplicationError, CommandParser, CommandResponse, CommandRouter, MessageSinkPort,
    TransitFeedPort,
};
use async_trait::async_trait;
use domain::{DirectMessage, Post, UserId};
use integration_nextbus::NextBusConfig;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use infrastructure::{AppConfig, NextBusAdapter};

fn adapter_for(server: &MockServer) -> NextBusAdapter {
    NextBusAdapter::from_config(&NextBusConfig::for_testing(server.uri())).unwrap()
}

fn xml(body: &'static str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body)
}

// ============================================================================
// Adapter Tests
// ============================================================================

mod adapter_tests {
    use super::*;

    #[tokio::test]
    async fn route_config_is_converted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("command", "routeConfig"))
            .and(query_param("a", "ttc"))
            .and(query_param("r", "504"))
            .respond_with(xml(
                r#"<body copyright="x">
<route tag="504" title="504-King" color="ff0000" oppositeColor="ffffff" latMin="43.63" latMax="43.67" lonMin="-79.47" lonMax="-79.34">
<stop tag="15036" title="King St West At Spadina Ave" lat="43.64" lon="-79.39" stopId="15036"/>
<direction tag="504_0_504A" title="East - 504 King towards Broadview Station" name="East" useForUI="true">
<stop tag="15036"/>
</direction>
</route>
</body>"#,
            ))
            .mount(&server)
            .await;

        let config = adapter_for(&server)
            .route_config("ttc", "504")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(config.title, "504-King");
        assert_eq!(config.stops[0].stop_id.as_deref(), Some("15036"));
        assert_eq!(config.directions[0].stop_tags, vec!["15036".to_string()]);
    }

    #[tokio::test]
    async fn feed_error_becomes_transit_feed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(xml(
                "<body copyright=\"x\">\n<Error shouldRetry=\"false\">\n  Stop s=0000 on route r=504 is not valid.\n</Error>\n</body>",
            ))
            .mount(&server)
            .await;

        let err = adapter_for(&server)
            .predictions("ttc", "504", "0000")
            .await
            .unwrap_err();
        match err {
            ApplicationError::TransitFeed(message) => {
                assert_eq!(message, "Stop s=0000 on route r=504 is not valid.");
            },
            other => unreachable!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_becomes_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = adapter_for(&server).list_agencies().await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
        assert!(err.is_retryable());
    }
}

// ============================================================================
// Command Flow Tests
// ============================================================================

mod command_flow_tests {
    use super::*;

    #[derive(Default)]
    struct CollectingSink {
        sent: Mutex<Vec<DirectMessage>>,
    }

    #[async_trait]
    impl MessageSinkPort for CollectingSink {
        async fn post_direct_message(
            &self,
            recipient: &UserId,
            message: DirectMessage,
        ) -> Result<Post, ApplicationError> {
            self.sent.lock().unwrap().push(message);
            Ok(Post {
                id: "p1".to_string(),
                channel_id: format!("dm-{recipient}"),
            })
        }

        async fn post_ephemeral(&self, _recipient: &UserId, _text: &str) {}
    }

    fn router(server: &MockServer, sink: Arc<CollectingSink>) -> CommandRouter {
        let config = AppConfig::default();
        CommandRouter::new(
            Arc::new(adapter_for(server)),
            sink,
            config.bot_identity().unwrap(),
            CommandParser::new(&config.command.trigger),
        )
    }

    #[tokio::test]
    async fn prediction_command_posts_direct_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("command", "predictions"))
            .and(query_param("a", "ttc"))
            .and(query_param("r", "504"))
            .and(query_param("s", "15036"))
            .respond_with(xml(
                r#"<body copyright="x">
<predictions agencyTitle="Toronto Transit Commission" routeTitle="504-King" routeTag="504" stopTitle="King St West At Spadina Ave" stopTag="15036">
<direction title="East - 504 King towards Broadview Station">
<prediction epochTime="1700000100000" seconds="100" minutes="1" isDeparture="false" dirTag="504_0_504A" vehicle="4401" block="504_4_40" tripTag="1"/>
<prediction epochTime="1700000400000" seconds="400" minutes="6" isDeparture="false" dirTag="504_0_504A" vehicle="4402" block="504_4_42" tripTag="2"/>
</direction>
</predictions>
</body>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let sink = Arc::new(CollectingSink::default());
        let router = router(&server, sink.clone());
        let user = UserId::new("user-1").unwrap();

        let response = router
            .execute(&user, "/nextbus prediction ttc 504 15036")
            .await;
        assert!(matches!(response, CommandResponse::Delivered(_)));

        let sent = sink.sent.lock().unwrap();
        let message = &sent[0];
        assert_eq!(message.sender.as_str(), "nextbusbot");
        assert_eq!(message.title.as_deref(), Some("Toronto Transit Commission"));
        let departures: Vec<_> = message
            .fields
            .iter()
            .filter(|f| f.title == "Next departure")
            .map(|f| f.value.clone())
            .collect();
        assert_eq!(
            departures,
            vec!["1 minutes 100 seconds", "6 minutes 400 seconds"]
        );
    }

    #[tokio::test]
    async fn feed_error_is_reported_inline() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(xml(
                r#"<body copyright="x"><Error shouldRetry="false">Agency parameter "a=zzz" is not valid.</Error></body>"#,
            ))
            .mount(&server)
            .await;

        let sink = Arc::new(CollectingSink::default());
        let router = router(&server, sink.clone());
        let user = UserId::new("user-1").unwrap();

        let response = router.execute(&user, "/nextbus routes zzz").await;
        let text = response.ephemeral_text().unwrap();
        assert!(text.starts_with("failed to list nextBus routes... "));
        assert!(text.contains("Agency parameter \"a=zzz\" is not valid."));
        assert!(sink.sent.lock().unwrap().is_empty());
    }
}
