//! End-to-end tests for the full call path: build query, GET against a
//! mock server, validate the status, parse the XML and map the result.
//! No test here touches the network.

use bgg_api::{BggClient, BggError, ClientConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> BggClient {
    BggClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap()
}

fn xml_200(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(format!(
        "<?xml version='1.0' encoding='utf-8'?>{body}"
    ))
}

mod endpoints {
    use super::*;

    #[tokio::test]
    async fn search_returns_items_with_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("query", "Burgund"))
            .and(query_param("type", "boardgame"))
            .respond_with(xml_200("<items total='1'><item id='9'/></items>"))
            .mount(&server)
            .await;

        let results = client_for(&server)
            .await
            .search("Burgund", &[("type", "boardgame")])
            .await
            .unwrap();
        assert_eq!(results.total(), 1);
        assert_eq!(results.first().unwrap().id(), Some(9));
    }

    #[tokio::test]
    async fn collection_item_id_is_the_objectid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collection"))
            .and(query_param("username", "texasjdl"))
            .and(query_param("own", "1"))
            .respond_with(xml_200("<items><item objectid='7'/></items>"))
            .mount(&server)
            .await;

        let collection = client_for(&server)
            .await
            .collection("texasjdl", &[("own", "1"), ("type", "boardgame")])
            .await
            .unwrap();
        assert_eq!(collection.first().unwrap().id(), Some(7));
    }

    #[tokio::test]
    async fn family_exposes_its_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/family"))
            .and(query_param("id", "1234"))
            .respond_with(xml_200("<items><item type='boardgamefamily'/></items>"))
            .mount(&server)
            .await;

        let family = client_for(&server).await.family(1234).await.unwrap();
        assert_eq!(family.family_type(), Some("boardgamefamily"));
    }

    #[tokio::test]
    async fn guild_exposes_name_and_always_requests_members() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guild"))
            .and(query_param("id", "1234"))
            .and(query_param("members", "1"))
            .and(query_param("page", "2"))
            .respond_with(xml_200("<guild name='my_guild'></guild>"))
            .mount(&server)
            .await;

        let guild = client_for(&server)
            .await
            .guild(1234, &[("page", "2")])
            .await
            .unwrap();
        assert_eq!(guild.name(), Some("my_guild"));
    }

    #[tokio::test]
    async fn hot_iterates_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hot"))
            .and(query_param("type", "boardgame"))
            .respond_with(xml_200("<items><item id='8' rank='1'/></items>"))
            .mount(&server)
            .await;

        let hot = client_for(&server)
            .await
            .hot(&[("type", "boardgame")])
            .await
            .unwrap();
        assert_eq!(hot.first().unwrap().id(), Some(8));
    }

    #[tokio::test]
    async fn plays_exposes_total_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plays"))
            .and(query_param("id", "84876"))
            .and(query_param("username", "texasjd1"))
            .respond_with(xml_200("<plays total='10'><play/></plays>"))
            .mount(&server)
            .await;

        let plays = client_for(&server)
            .await
            .plays("texasjd1", 84876)
            .await
            .unwrap();
        assert_eq!(plays.total_count(), 10);
    }

    #[tokio::test]
    async fn thing_returns_the_raw_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(query_param("id", "84876"))
            .and(query_param("type", "boardgame"))
            .respond_with(xml_200("<items><item id='84876' type='boardgame'/></items>"))
            .mount(&server)
            .await;

        let doc = client_for(&server)
            .await
            .thing(&[("id", "84876"), ("type", "boardgame")])
            .await
            .unwrap();
        let item = doc.first_child("item").unwrap();
        assert_eq!(item.attr("id"), Some("84876"));
    }
}

mod users {
    use super::*;

    #[tokio::test]
    async fn existing_user_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(query_param("name", "texasjdl"))
            .respond_with(xml_200("<user id='1'></user>"))
            .mount(&server)
            .await;

        let user = client_for(&server).await.user("texasjdl").await.unwrap();
        assert_eq!(user.id(), 1);
    }

    #[tokio::test]
    async fn empty_id_means_user_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(xml_200("<user id=''></user>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.user("nobody").await.unwrap_err();
        assert!(matches!(err, BggError::UserNotFound(_)));
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn non_200_fails_for_every_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        for name in [
            "collection", "family", "guild", "hot", "plays", "search", "thing", "user",
        ] {
            let err = client.call(name, &[]).await.unwrap_err();
            match err {
                BggError::Http { status, body } => {
                    assert_eq!(status, 500);
                    assert_eq!(body, "boom");
                }
                other => panic!("{name}: expected Http, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn unknown_method_is_rejected_before_any_request() {
        let server = MockServer::start().await;
        let err = client_for(&server).await.call("foo", &[]).await.unwrap_err();
        assert!(matches!(err, BggError::MethodNotFound(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_fails_parse() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<items><item/>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .search("Burgund", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, BggError::MalformedXml(_)));
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Port from a server that has already shut down.
        let uri = {
            let server = MockServer::start().await;
            server.uri()
        };

        let client = BggClient::with_config(ClientConfig::with_base_url(uri)).unwrap();
        let err = client.hot(&[]).await.unwrap_err();
        assert!(matches!(err, BggError::Transport(_)));
    }
}
