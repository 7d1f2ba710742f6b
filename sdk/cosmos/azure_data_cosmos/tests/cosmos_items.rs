// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

mod framework;

use std::error::Error;

use azure_data_cosmos::{
    clients::{ContainerClient, ContainerClientMethods, DatabaseClientMethods},
    constants,
    models::StoredProcedureProperties,
    ConsistencyLevel, CosmosClientMethods, CosmosClientOptions, IndexingDirective, ItemOptions,
    PartitionKey, Query, QueryOptions, QueryPartitionStrategy,
};
use azure_core::http::{
    headers::{self, Headers},
    Body, Method, StatusCode,
};
use framework::{
    body_json, collect_items, empty_response, header, json_response, json_response_with_headers,
    path, TestAccount,
};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Product {
    id: String,
    category: String,
    name: String,
}

impl azure_core::http::Model for Product {
    async fn from_response_body(
        body: azure_core::http::response::ResponseBody,
    ) -> azure_core::Result<Self> {
        body.json().await
    }
}

fn product(id: &str) -> Product {
    Product {
        id: id.into(),
        category: "bikes".into(),
        name: format!("Bike {id}"),
    }
}

fn container(account: &TestAccount) -> ContainerClient {
    account
        .client
        .database_client("SalesDB")
        .container_client("Products")
}

#[tokio::test]
async fn create_item_is_minimal_by_default() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|_| empty_response(StatusCode::Created));
    let container = container(&account);

    let response = container.create_item("bikes", product("1"), None).await?;
    assert_eq!(response.status(), StatusCode::Created);

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Post);
    assert_eq!(path(&request), "/dbs/SalesDB/colls/Products/docs");
    assert_eq!(header(&request, &constants::PARTITION_KEY), Some(r#"["bikes"]"#));
    assert_eq!(header(&request, &constants::PREFER), Some("return=minimal"));
    assert_eq!(header(&request, &constants::IS_UPSERT), None);
    assert_eq!(
        header(&request, &headers::CONTENT_TYPE),
        Some("application/json")
    );
    assert_eq!(body_json(&request), serde_json::to_value(product("1"))?);
    Ok(())
}

#[tokio::test]
async fn upsert_item_returns_content_when_asked() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|request| json_response(StatusCode::Ok, body_json(request)));
    let container = container(&account);

    let options = ItemOptions {
        enable_content_response_on_write: true,
        indexing_directive: Some(IndexingDirective::Exclude),
        ..Default::default()
    };
    let item = container
        .upsert_item("bikes", product("2"), Some(options))
        .await?
        .into_body()
        .await?;
    assert_eq!(item, product("2"));

    let request = account.last_request();
    assert_eq!(header(&request, &constants::IS_UPSERT), Some("True"));
    assert_eq!(header(&request, &constants::PREFER), None);
    assert_eq!(
        header(&request, &constants::INDEXING_DIRECTIVE),
        Some("Exclude")
    );
    Ok(())
}

#[tokio::test]
async fn read_item() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|_| {
        json_response(
            StatusCode::Ok,
            json!({ "id": "1", "category": "bikes", "name": "Bike 1", "_rid": "x", "_etag": "\"e1\"" }),
        )
    });
    let container = container(&account);

    let item: Product = container.read_item(7, "1", None).await?.into_body().await?;
    assert_eq!(item, product("1"));

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Get);
    assert_eq!(path(&request), "/dbs/SalesDB/colls/Products/docs/1");
    assert_eq!(header(&request, &constants::PARTITION_KEY), Some("[7]"));
    assert_eq!(header(&request, &constants::PREFER), None);
    Ok(())
}

#[tokio::test]
async fn missing_item_is_not_found() {
    let account = TestAccount::new(|_| {
        json_response(
            StatusCode::NotFound,
            json!({ "code": "NotFound", "message": "Entity with the specified id does not exist in the system." }),
        )
    });
    let container = container(&account);

    let err = container
        .read_item::<Product>("bikes", "missing", None)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), Some(StatusCode::NotFound));
    assert_eq!(framework::error_code(&err), Some("NotFound"));
}

#[tokio::test]
async fn replace_item_with_stale_etag_fails() {
    let account = TestAccount::new(|request| {
        if header(request, &headers::IF_MATCH) == Some("\"current\"") {
            json_response(StatusCode::Ok, body_json(request))
        } else {
            json_response(
                StatusCode::PreconditionFailed,
                json!({ "code": "PreconditionFailed", "message": "Operation cannot be performed because one of the specified precondition is not met." }),
            )
        }
    });
    let container = container(&account);

    let options = ItemOptions {
        if_match_etag: Some("\"stale\"".into()),
        ..Default::default()
    };
    let err = container
        .replace_item("bikes", "1", product("1"), Some(options))
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), Some(StatusCode::PreconditionFailed));

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Put);
    assert_eq!(path(&request), "/dbs/SalesDB/colls/Products/docs/1");

    let options = ItemOptions {
        if_match_etag: Some("\"current\"".into()),
        ..Default::default()
    };
    container
        .replace_item("bikes", "1", product("1"), Some(options))
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_item() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|_| empty_response(StatusCode::NoContent));
    let container = container(&account);

    container
        .delete_item(PartitionKey::NULL, "1", None)
        .await?;

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Delete);
    assert_eq!(header(&request, &constants::PARTITION_KEY), Some("[null]"));
    Ok(())
}

#[tokio::test]
async fn query_items_single_partition() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|_| {
        json_response(
            StatusCode::Ok,
            json!({ "_rid": "x", "Documents": [{ "id": "1", "category": "bikes", "name": "Bike 1" }], "_count": 1 }),
        )
    });
    let container = container(&account);

    let query = Query::from("SELECT * FROM c WHERE c.name = @name").with_parameter("@name", "Bike 1")?;
    let options = QueryOptions {
        max_item_count: Some(10),
        ..Default::default()
    };
    let items: Vec<Product> =
        collect_items(container.query_items(query, "bikes", Some(options))?).await?;
    assert_eq!(items, vec![product("1")]);

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Post);
    assert_eq!(header(&request, &constants::QUERY), Some("True"));
    assert_eq!(
        header(&request, &headers::CONTENT_TYPE),
        Some("application/query+json")
    );
    assert_eq!(header(&request, &constants::PARTITION_KEY), Some(r#"["bikes"]"#));
    assert_eq!(header(&request, &constants::QUERY_ENABLE_CROSS_PARTITION), None);
    assert_eq!(header(&request, &constants::MAX_ITEM_COUNT), Some("10"));
    Ok(())
}

#[tokio::test]
async fn query_items_cross_partition_follows_continuations() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|request| {
        let (body, next) = match header(request, &constants::CONTINUATION) {
            None => (json!({ "Documents": [1, 2] }), Some("{\"token\":\"+RID:~a\",\"range\":{\"min\":\"\",\"max\":\"FF\"}}")),
            Some(_) => (json!({ "Documents": [3] }), None),
        };
        let mut headers = Headers::new();
        if let Some(next) = next {
            headers.insert(constants::CONTINUATION, next);
        }
        json_response_with_headers(StatusCode::Ok, headers, body)
    });
    let container = container(&account);

    let numbers = collect_items(container.query_items::<u32>(
        "SELECT VALUE c.n FROM c",
        QueryPartitionStrategy::CrossPartition,
        None,
    )?)
    .await?;
    assert_eq!(numbers, vec![1, 2, 3]);

    let requests = account.requests();
    assert_eq!(
        header(&requests[0], &constants::QUERY_ENABLE_CROSS_PARTITION),
        Some("True")
    );
    assert_eq!(header(&requests[0], &constants::PARTITION_KEY), None);
    assert_eq!(
        header(&requests[1], &constants::CONTINUATION),
        Some("{\"token\":\"+RID:~a\",\"range\":{\"min\":\"\",\"max\":\"FF\"}}")
    );
    Ok(())
}

#[tokio::test]
async fn query_items_can_resume_from_continuation() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|_| json_response(StatusCode::Ok, json!({ "Documents": [] })));
    let container = container(&account);

    let options = QueryOptions {
        continuation: Some("resume-here".into()),
        ..Default::default()
    };
    let pages: Vec<_> = container
        .query_items::<serde_json::Value>("SELECT * FROM c", "bikes", Some(options))?
        .try_collect()
        .await?;
    assert_eq!(pages.len(), 1);
    assert_eq!(
        header(&account.last_request(), &constants::CONTINUATION),
        Some("resume-here")
    );
    Ok(())
}

#[tokio::test]
async fn read_all_items_reads_feed() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|_| {
        json_response(
            StatusCode::Ok,
            json!({ "Documents": [{ "id": "1", "category": "bikes", "name": "Bike 1" }], "_count": 1 }),
        )
    });
    let container = container(&account);

    let items: Vec<Product> =
        collect_items(container.read_all_items(Some("bikes".into()), None)).await?;
    assert_eq!(items.len(), 1);

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Get);
    assert_eq!(path(&request), "/dbs/SalesDB/colls/Products/docs");
    assert!(matches!(request.body(), Body::Bytes(bytes) if bytes.is_empty()));
    assert_eq!(header(&request, &constants::QUERY), None);
    Ok(())
}

#[tokio::test]
async fn session_token_is_echoed_within_container() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::with_options(
        |_| {
            let mut headers = Headers::new();
            headers.insert(constants::SESSION_TOKEN, "0:1#100#3=50");
            json_response_with_headers(
                StatusCode::Ok,
                headers,
                json!({ "id": "1", "category": "bikes", "name": "Bike 1" }),
            )
        },
        CosmosClientOptions {
            consistency_level: Some(ConsistencyLevel::Session),
            ..Default::default()
        },
    );
    let container = container(&account);

    let _: Product = container.read_item("bikes", "1", None).await?.into_body().await?;
    let _: Product = container.read_item("bikes", "1", None).await?.into_body().await?;

    let options = ItemOptions {
        session_token: Some("0:1#5".into()),
        ..Default::default()
    };
    let _: Product = container
        .read_item("bikes", "1", Some(options))
        .await?
        .into_body()
        .await?;

    let requests = account.requests();
    assert_eq!(header(&requests[0], &constants::SESSION_TOKEN), None);
    assert_eq!(
        header(&requests[1], &constants::SESSION_TOKEN),
        Some("0:1#100#3=50")
    );
    assert_eq!(header(&requests[2], &constants::SESSION_TOKEN), Some("0:1#5"));
    assert_eq!(
        header(&requests[1], &constants::CONSISTENCY_LEVEL),
        Some("Session")
    );
    Ok(())
}

#[tokio::test]
async fn stored_procedures() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|request| match (request.method(), path(request)) {
        (Method::Post, "/dbs/SalesDB/colls/Products/sprocs") => {
            json_response(StatusCode::Created, body_json(request))
        }
        (Method::Post, "/dbs/SalesDB/colls/Products/sprocs/greet") => {
            json_response(StatusCode::Ok, json!(format!("Hello, {}!", body_json(request)[0].as_str().unwrap_or_default())))
        }
        (Method::Delete, "/dbs/SalesDB/colls/Products/sprocs/greet") => {
            empty_response(StatusCode::NoContent)
        }
        other => panic!("unexpected request {other:?}"),
    });
    let container = container(&account);

    let created = container
        .create_stored_procedure(
            StoredProcedureProperties::new(
                "greet",
                "function (name) { getContext().getResponse().setBody('Hello, ' + name + '!'); }",
            ),
            None,
        )
        .await?
        .into_body()
        .await?;
    assert_eq!(created.id, "greet");

    let greeting: String = container
        .execute_stored_procedure("greet", "bikes", ["world"], None)
        .await?
        .into_body()
        .await?;
    assert_eq!(greeting, "Hello, world!");
    let execute = account.last_request();
    assert_eq!(header(&execute, &constants::PARTITION_KEY), Some(r#"["bikes"]"#));
    assert_eq!(body_json(&execute), json!(["world"]));

    container.delete_stored_procedure("greet", None).await?;
    Ok(())
}

#[tokio::test]
async fn delete_container() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|_| empty_response(StatusCode::NoContent));
    container(&account).delete(None).await?;

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Delete);
    assert_eq!(path(&request), "/dbs/SalesDB/colls/Products");
    Ok(())
}

#[tokio::test]
async fn read_partition_key_ranges() -> Result<(), Box<dyn Error>> {
    let account = TestAccount::new(|request| {
        let (body, next) = match header(request, &constants::CONTINUATION) {
            None => (
                json!({
                    "_rid": "qYcAAPEvJBQ=",
                    "PartitionKeyRanges": [
                        { "id": "0", "minInclusive": "", "maxExclusive": "3F", "parents": [] },
                        { "id": "1", "minInclusive": "3F", "maxExclusive": "7F", "parents": [] }
                    ],
                    "_count": 2
                }),
                Some("pk-page-2"),
            ),
            Some(_) => (
                json!({
                    "_rid": "qYcAAPEvJBQ=",
                    "PartitionKeyRanges": [
                        { "id": "2", "minInclusive": "7F", "maxExclusive": "FF", "parents": ["0"] }
                    ],
                    "_count": 1
                }),
                None,
            ),
        };
        let mut headers = Headers::new();
        if let Some(next) = next {
            headers.insert(constants::CONTINUATION, next);
        }
        json_response_with_headers(StatusCode::Ok, headers, body)
    });
    let container = container(&account);

    let ranges = collect_items(container.read_partition_key_ranges(None)).await?;
    let ids: Vec<&str> = ranges.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
    assert_eq!(ranges[2].max_exclusive, "FF");
    assert_eq!(ranges[2].parents, vec!["0".to_string()]);

    let requests = account.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(*requests[0].method(), Method::Get);
    assert_eq!(path(&requests[0]), "/dbs/SalesDB/colls/Products/pkranges");
    assert_eq!(header(&requests[0], &constants::QUERY), None);
    assert_eq!(header(&requests[1], &constants::CONTINUATION), Some("pk-page-2"));
    Ok(())
}
