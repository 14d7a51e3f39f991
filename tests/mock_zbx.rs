#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_partial_json, body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zabbix_rpc::error::{Error, ErrorKind, ZbxError};
use zabbix_rpc::zbx_client::{
    Dialect, Host, HostGroup, Item, Params, TriggerValue, TriggerValueFlags, Version, WireLog,
    ZbxClient,
};

fn client(server: &MockServer) -> ZbxClient {
    ZbxClient::new(Url::parse(&server.uri()).expect("valid mock url")).expect("client")
}

fn session(server: &MockServer, version: Version) -> ZbxClient {
    client(server)
        .with_token(SecretString::from("abc123"))
        .with_version(version)
}

fn reply(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": 1
    }))
}

fn api_error(code: i64, message: &str, data: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "error": {"code": code, "message": message, "data": data},
        "id": 1
    }))
}

async fn answer(server: &MockServer, rpc_method: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_string_contains(format!("\"{rpc_method}\"")))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("json body"))
        .collect()
}

#[derive(Default)]
struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl WireLog for RecordingLog {
    fn request(&self, id: u64, body: &str) {
        self.lines.lock().unwrap().push(format!("request {id} {body}"));
    }

    fn response(&self, id: u64, body: &str) {
        self.lines.lock().unwrap().push(format!("response {id} {body}"));
    }

    fn failure(&self, id: u64, error: &ZbxError) {
        self.lines.lock().unwrap().push(format!("failure {id} {error}"));
    }
}

#[tokio::test]
async fn login_stores_token_and_version() {
    let server = MockServer::start().await;
    answer(&server, "APIInfo.version", reply(json!("2.0.11"))).await;
    answer(&server, "user.login", reply(json!("abc123"))).await;

    let mut client = client(&server);
    let token = client
        .login("admin", &SecretString::from("zabbix"))
        .await
        .expect("login");

    assert_eq!(token.expose_secret(), "abc123");
    assert_eq!(
        client.auth_token().map(|token| token.expose_secret().to_string()),
        Some("abc123".to_string())
    );
    assert_eq!(client.version(), Version::new(2, 0, 11));
    assert_eq!(client.dialect(), Dialect::Current);
    assert!(client.is_version_at_least(2, 0, 0));
    assert!(!client.is_version_at_least(2, 4, 0));

    let requests = bodies(&server).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0]["method"], "APIInfo.version");
    assert_eq!(requests[1]["method"], "user.login");
    assert_eq!(
        requests[1]["params"],
        json!({"user": "admin", "password": "zabbix"})
    );
    assert!(requests[1].get("auth").is_none());
    assert_eq!(requests[0]["id"], 1);
    assert_eq!(requests[1]["id"], 2);
}

#[tokio::test]
async fn login_uses_username_from_5_4() {
    let server = MockServer::start().await;
    answer(&server, "APIInfo.version", reply(json!("6.0.3"))).await;
    answer(&server, "user.login", reply(json!("abc123"))).await;

    let mut client = client(&server);
    client
        .login("admin", &SecretString::from("zabbix"))
        .await
        .expect("login");

    let requests = bodies(&server).await;
    assert_eq!(requests[1]["params"]["username"], "admin");
    assert!(requests[1]["params"].get("user").is_none());
}

#[tokio::test]
async fn version_is_probed_again_with_auth_after_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(
            json!({"method": "APIInfo.version", "auth": "abc123"}),
        ))
        .respond_with(reply(json!("1.8.21")))
        .with_priority(1)
        .mount(&server)
        .await;
    answer(
        &server,
        "APIInfo.version",
        api_error(-32602, "Invalid params.", "Not authorized"),
    )
    .await;
    answer(&server, "user.login", reply(json!("abc123"))).await;

    let mut client = client(&server);
    client
        .login("admin", &SecretString::from("zabbix"))
        .await
        .expect("login");

    assert_eq!(client.version(), Version::new(1, 8, 21));
    assert_eq!(client.dialect(), Dialect::Legacy);
    assert_eq!(bodies(&server).await.len(), 3);
}

#[tokio::test]
async fn failed_version_discovery_does_not_fail_login() {
    let server = MockServer::start().await;
    answer(&server, "APIInfo.version", reply(json!("not-a-version"))).await;
    answer(&server, "user.login", reply(json!("abc123"))).await;

    let mut client = client(&server);
    client
        .login("admin", &SecretString::from("zabbix"))
        .await
        .expect("login");

    assert!(client.version().is_unknown());
    assert_eq!(client.dialect(), Dialect::Legacy);
    assert!(client.auth_token().is_some());
}

#[tokio::test]
async fn hosts_get_returns_typed_host() {
    let server = MockServer::start().await;
    answer(
        &server,
        "host.get",
        reply(json!([{
            "hostid": "10084",
            "host": "Zabbix server",
            "status": "0",
            "available": "1",
            "groups": [{"groupid": "4", "name": "Zabbix servers"}],
            "interfaces": [{"interfaceid": "1", "hostid": "10084", "ip": "127.0.0.1", "dns": "", "port": "10050", "type": "1", "main": "1", "useip": "1"}]
        }])),
    )
    .await;

    let client = session(&server, Version::new(2, 0, 11));
    let hosts = client
        .hosts_get(Params::new().with("hostids", "10084"))
        .await
        .expect("hosts");

    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].host_id, "10084");
    assert_eq!(hosts[0].groups[0].group_id, "4");
    assert_eq!(hosts[0].interfaces[0].port, "10050");

    let requests = bodies(&server).await;
    assert_eq!(requests[0]["params"]["hostids"], "10084");
    assert_eq!(requests[0]["params"]["selectInterfaces"], "extend");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_get_distinct_request_ids() {
    const CALLS: u64 = 16;
    let server = MockServer::start().await;
    answer(&server, "host.get", reply(json!([]))).await;

    let client = Arc::new(session(&server, Version::new(2, 0, 11)));
    let handles: Vec<_> = (0..CALLS)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.hosts_get(Params::new()).await })
        })
        .collect();
    for handle in handles {
        handle.await.expect("task").expect("hosts");
    }

    let mut ids: Vec<u64> = bodies(&server)
        .await
        .iter()
        .map(|body| body["id"].as_u64().expect("numeric id"))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=CALLS).collect::<Vec<_>>());
}

#[tokio::test]
async fn host_get_by_id_rejects_two_results() {
    let server = MockServer::start().await;
    answer(
        &server,
        "host.get",
        reply(json!([
            {"hostid": "10084", "host": "a"},
            {"hostid": "10085", "host": "b"}
        ])),
    )
    .await;

    let client = session(&server, Version::new(2, 0, 11));
    let err = client.host_get_by_id("10084").await.expect_err("two hosts");
    match err {
        Error::Zabbix(ZbxError::ExpectedOne { got: 2 }) => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn host_group_get_by_name_rejects_zero_results() {
    let server = MockServer::start().await;
    answer(&server, "hostgroup.get", reply(json!([]))).await;

    let client = session(&server, Version::new(2, 0, 11));
    let err = client
        .host_group_get_by_name("Linux servers")
        .await
        .expect_err("no group");
    assert_eq!(err.zabbix_kind(), Some(ErrorKind::Cardinality));
    assert!(matches!(err, Error::Zabbix(ZbxError::ExpectedOne { got: 0 })));

    let requests = bodies(&server).await;
    assert_eq!(
        requests[0]["params"]["filter"],
        json!({"name": "Linux servers"})
    );
}

#[tokio::test]
async fn create_then_get_by_id_returns_the_assigned_id() {
    let server = MockServer::start().await;
    answer(&server, "hostgroup.create", reply(json!({"groupids": ["7"]}))).await;
    answer(
        &server,
        "hostgroup.get",
        reply(json!([{"groupid": "7", "name": "Linux servers", "internal": "0"}])),
    )
    .await;

    let client = session(&server, Version::new(2, 0, 11));
    let mut groups = vec![HostGroup {
        name: "Linux servers".to_string(),
        ..HostGroup::default()
    }];
    client.host_groups_create(&mut groups).await.expect("create");
    assert_eq!(groups[0].group_id, "7");

    let fetched = client
        .host_group_get_by_id(&groups[0].group_id)
        .await
        .expect("get");
    assert_eq!(fetched.group_id, groups[0].group_id);

    let requests = bodies(&server).await;
    assert_eq!(requests[0]["params"], json!([{"name": "Linux servers"}]));
}

#[tokio::test]
async fn create_assigns_object_shaped_ids_in_submission_order() {
    let server = MockServer::start().await;
    let confirmed: serde_json::Map<String, Value> = (0..12)
        .map(|index| (index.to_string(), json!((100 + index).to_string())))
        .collect();
    answer(
        &server,
        "hostgroup.create",
        reply(json!({"groupids": confirmed})),
    )
    .await;

    let client = session(&server, Version::new(2, 0, 11));
    let mut groups: Vec<HostGroup> = (0..12)
        .map(|index| HostGroup {
            name: format!("group {index}"),
            ..HostGroup::default()
        })
        .collect();
    client.host_groups_create(&mut groups).await.expect("create");

    let assigned: Vec<&str> = groups.iter().map(|group| group.group_id.as_str()).collect();
    let expected: Vec<String> = (100..112).map(|id: u32| id.to_string()).collect();
    assert_eq!(assigned, expected);
    assert_eq!(groups[2].group_id, "102");
}

#[tokio::test]
async fn bulk_delete_count_mismatch_keeps_ids() {
    let server = MockServer::start().await;
    answer(&server, "host.delete", reply(json!({"hostids": ["1"]}))).await;

    let client = session(&server, Version::new(2, 4, 0));
    let mut hosts = vec![
        Host {
            host_id: "1".to_string(),
            ..Host::default()
        },
        Host {
            host_id: "2".to_string(),
            ..Host::default()
        },
    ];
    let err = client.hosts_delete(&mut hosts).await.expect_err("mismatch");
    match err {
        Error::Zabbix(ZbxError::CountMismatch {
            expected: 2,
            got: 1,
        }) => {}
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(hosts[0].host_id, "1");
    assert_eq!(hosts[1].host_id, "2");

    let requests = bodies(&server).await;
    assert_eq!(requests[0]["params"], json!(["1", "2"]));
}

#[tokio::test]
async fn delete_clears_ids_and_uses_objects_before_2_4() {
    let server = MockServer::start().await;
    answer(&server, "host.delete", reply(json!({"hostids": ["1"]}))).await;

    let client = session(&server, Version::new(2, 2, 9));
    let mut hosts = vec![Host {
        host_id: "1".to_string(),
        ..Host::default()
    }];
    client.hosts_delete(&mut hosts).await.expect("delete");
    assert!(hosts[0].host_id.is_empty());

    let requests = bodies(&server).await;
    assert_eq!(requests[0]["params"], json!([{"hostid": "1"}]));
}

#[tokio::test]
async fn bulk_create_count_mismatch_assigns_nothing() {
    let server = MockServer::start().await;
    answer(&server, "item.create", reply(json!({"itemids": ["5"]}))).await;

    let client = session(&server, Version::new(2, 0, 11));
    let mut items = vec![Item::default(), Item::default()];
    let err = client.items_create(&mut items).await.expect_err("mismatch");
    assert!(matches!(
        err,
        Error::Zabbix(ZbxError::CountMismatch {
            expected: 2,
            got: 1
        })
    ));
    assert!(items.iter().all(|item| item.item_id.is_empty()));
}

#[tokio::test]
async fn legacy_item_create_writes_name_as_description() {
    let server = MockServer::start().await;
    answer(&server, "item.create", reply(json!({"itemids": ["5"]}))).await;

    let client = session(&server, Version::new(1, 8, 21));
    let mut items = vec![Item {
        host_id: "10084".to_string(),
        key: "system.cpu.load".to_string(),
        name: "CPU load".to_string(),
        application_ids: vec!["13".to_string()],
        ..Item::default()
    }];
    client.items_create(&mut items).await.expect("create");
    assert_eq!(items[0].item_id, "5");

    let requests = bodies(&server).await;
    let sent = &requests[0]["params"][0];
    assert_eq!(sent["description"], "CPU load");
    assert!(sent.get("name").is_none());
    assert_eq!(sent["applications"], json!(["13"]));
    assert_eq!(sent["key_"], "system.cpu.load");
}

#[tokio::test]
async fn legacy_trigger_get_rewrites_params_and_remaps_unknown() {
    let server = MockServer::start().await;
    answer(
        &server,
        "trigger.get",
        reply(json!([{
            "triggerid": "13491",
            "description": "Zabbix agent is unreachable",
            "priority": "3",
            "value": "2",
            "functions": {"13": {"functionid": "13", "itemid": "23", "function": "nodata", "parameter": "300"}}
        }])),
    )
    .await;

    let client = session(&server, Version::new(1, 8, 21));
    let triggers = client
        .triggers_get(Params::new().with("triggerids", "13491"))
        .await
        .expect("triggers");

    assert_eq!(triggers[0].value, TriggerValue::Ok);
    assert_eq!(triggers[0].value_flags, TriggerValueFlags::Unknown);
    assert_eq!(triggers[0].functions[0].function, "nodata");

    let requests = bodies(&server).await;
    let params = &requests[0]["params"];
    assert_eq!(params["select_functions"], "extend");
    assert!(params.get("selectFunctions").is_none());
}

#[tokio::test]
async fn legacy_host_interfaces_are_refused_locally() {
    let server = MockServer::start().await;

    let client = session(&server, Version::new(1, 8, 21));
    let err = client
        .host_interfaces_get_by_host_id("10084", Params::new(), None)
        .await
        .expect_err("unsupported");
    assert_eq!(err.zabbix_kind(), Some(ErrorKind::Usage));
    assert!(bodies(&server).await.is_empty());
}

#[tokio::test]
async fn sla_get_walks_the_service_map() {
    let server = MockServer::start().await;
    answer(
        &server,
        "service.getsla",
        reply(json!({
            "2": {
                "status": "0",
                "problems": [],
                "sla": [{
                    "from": 1352452201,
                    "to": 1353057001,
                    "sla": 99.9,
                    "okTime": 604800,
                    "problemTime": 0,
                    "downtimeTime": 0
                }]
            }
        })),
    )
    .await;

    let client = session(&server, Version::new(2, 0, 11));
    let sla = client
        .sla_get(Params::new().with("serviceids", "2"))
        .await
        .expect("sla")
        .expect("one interval");
    assert_eq!(sla.from, 1_352_452_201);
    assert!((sla.sla - 99.9).abs() < f64::EPSILON);

    let err = client
        .sla_get(Params::new().with("serviceids", vec!["2".to_string()]))
        .await
        .expect_err("serviceids must be a string");
    assert_eq!(err.zabbix_kind(), Some(ErrorKind::Usage));
}

#[tokio::test]
async fn api_error_is_surfaced_with_details() {
    let server = MockServer::start().await;
    answer(
        &server,
        "host.get",
        api_error(-32602, "Invalid params.", "Not authorised."),
    )
    .await;

    let client = session(&server, Version::new(2, 0, 11));
    let err = client.hosts_get(Params::new()).await.expect_err("api error");
    match &err {
        Error::Zabbix(ZbxError::Api {
            code,
            message,
            data,
        }) => {
            assert_eq!(*code, -32602);
            assert_eq!(message, "Invalid params.");
            assert_eq!(data, "Not authorised.");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.zabbix_kind(), Some(ErrorKind::Protocol));

    let response = client
        .call("host.get", &json!({}))
        .await
        .expect("envelope without failing");
    assert_eq!(response.error.map(|err| err.code), Some(-32602));
}

#[tokio::test]
async fn http_error_status_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = session(&server, Version::new(2, 0, 11));
    let err = client
        .call_with_error("host.get", &json!({}))
        .await
        .expect_err("500");
    assert_eq!(err.zabbix_kind(), Some(ErrorKind::Transport));
}

#[tokio::test]
async fn wire_log_records_body_of_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream php-fpm down"))
        .mount(&server)
        .await;

    let log = Arc::new(RecordingLog::default());
    let client = session(&server, Version::new(2, 0, 11)).with_wire_log(log.clone());
    let err = client
        .call_with_error("host.get", &json!({}))
        .await
        .expect_err("502");
    assert!(matches!(
        err,
        Error::Zabbix(ZbxError::HttpStatus { status }) if status.as_u16() == 502
    ));

    let lines = log.lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "response 1 upstream php-fpm down");
}

#[tokio::test]
async fn wire_log_records_request_before_transport_failure() {
    let log = Arc::new(RecordingLog::default());
    let client = ZbxClient::new(Url::parse("http://127.0.0.1:9/api_jsonrpc.php").unwrap())
        .unwrap()
        .with_wire_log(log.clone());

    let err = client.api_version().await.expect_err("nothing listens");
    assert_eq!(err.zabbix_kind(), Some(ErrorKind::Transport));

    let lines = log.lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("request 1 "));
    assert!(lines[0].contains("APIInfo.version"));
    assert!(lines[1].starts_with("failure 1 "));
}

#[tokio::test]
async fn wire_log_records_request_and_response() {
    let server = MockServer::start().await;
    answer(&server, "APIInfo.version", reply(json!("2.0.11"))).await;

    let log = Arc::new(RecordingLog::default());
    let client = client(&server).with_wire_log(log.clone());
    assert_eq!(client.api_version().await.expect("version"), "2.0.11");

    let lines = log.lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("response 1 "));
    assert!(lines[1].contains("2.0.11"));
}

#[tokio::test]
async fn call_raw_embeds_params_verbatim() {
    let server = MockServer::start().await;
    answer(&server, "host.get", reply(json!([]))).await;

    let client = session(&server, Version::new(2, 0, 11));
    let response = client
        .call_raw("host.get", r#"{"hostids":["10084"],"limit":1}"#)
        .await
        .expect("raw call");
    assert_eq!(response.into_result().expect("result"), json!([]));

    let err = client
        .call_raw("host.get", "{not json")
        .await
        .expect_err("invalid json");
    assert_eq!(err.zabbix_kind(), Some(ErrorKind::Decode));

    let requests = bodies(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["params"], json!({"hostids": ["10084"], "limit": 1}));
    assert_eq!(requests[0]["auth"], "abc123");
}

#[tokio::test]
async fn host_get_payload_snapshot() {
    let server = MockServer::start().await;
    answer(&server, "host.get", reply(json!([]))).await;

    let client = session(&server, Version::new(2, 0, 11));
    let hosts = client
        .hosts_get(Params::new().with("hostids", "10084"))
        .await
        .expect("hosts");
    assert!(hosts.is_empty());

    let body = bodies(&server).await.remove(0);
    insta::assert_json_snapshot!("host_get_payload", body);
}
