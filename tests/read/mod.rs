use mongo_read::{
    bson::doc,
    error::ErrorKind,
    protocol::{Command, GetMore, Operation, Query, Reply, ResponseFlags},
    Read, ReadOptions,
};
use pretty_assertions::assert_eq;

use crate::util::TestNode;

fn unauthorized() -> Reply {
    Reply::builder()
        .flags(ResponseFlags::QUERY_FAILURE)
        .documents(vec![doc! { "$err": "unauthorized", "code": 10057 }])
        .build()
}

fn users_query(database: &str) -> Query {
    Query::builder()
        .database(database)
        .collection("users")
        .selector(doc! {})
        .build()
}

#[tokio::test]
async fn admin_session_is_restored_after_reconfiguration() {
    let success = Reply::builder()
        .cursor_id(0)
        .documents(vec![doc! { "user": "user", "db": "admin" }])
        .build();
    let node =
        TestNode::new([unauthorized(), success.clone()]).authenticated("admin", "user", "pass");

    let reply = Read::new(users_query("admin"))
        .execute(&node)
        .await
        .expect("read should succeed after logging in again");

    assert_eq!(reply, success);
    assert_eq!(
        node.logins(),
        vec![(
            "admin".to_string(),
            Some("user".to_string()),
            Some("pass".to_string())
        )]
    );
    assert_eq!(node.processed().len(), 2);
}

#[tokio::test]
async fn unauthenticated_database_fails_immediately() {
    let node = TestNode::new([unauthorized()]);

    let error = Read::new(users_query("reports"))
        .execute(&node)
        .await
        .unwrap_err();

    assert!(error.is_potential_reconfiguration());
    match *error.kind {
        ErrorKind::ReadFailure { ref details, .. } => {
            assert_eq!(details.as_ref(), unauthorized().documents().first());
        }
        ref other => panic!("expected read failure, got {other:?}"),
    }
    assert!(node.logins().is_empty());
    assert_eq!(node.processed().len(), 1);
}

#[tokio::test]
async fn persistent_unauthorized_node_is_not_retried_forever() {
    let node = TestNode::new([unauthorized(), unauthorized(), unauthorized()])
        .authenticated("admin", "user", "pass");

    let error = Read::new(users_query("admin"))
        .execute(&node)
        .await
        .unwrap_err();

    assert!(error.is_read_failure());
    assert_eq!(node.logins().len(), 1);
    assert_eq!(node.processed().len(), 2);
}

#[tokio::test]
async fn command_failure_is_surfaced_with_details() {
    let failure = Reply::builder()
        .documents(vec![
            doc! { "ok": 0, "errmsg": "no such command: 'frobnicate'", "code": 59 },
        ])
        .build();
    let node = TestNode::new([failure]).authenticated("admin", "user", "pass");
    let command = Command::new("admin", doc! { "frobnicate": 1 });

    let error = Read::new(command.clone())
        .execute(&node)
        .await
        .unwrap_err();

    assert_eq!(error.failed_operation(), Some(&Operation::from(command)));
    assert_eq!(
        error
            .failure_details()
            .and_then(|details| details.get_i32("code").ok()),
        Some(59)
    );
    assert!(node.logins().is_empty());
}

#[tokio::test]
async fn read_can_be_executed_against_several_nodes() {
    let get_more = GetMore::builder()
        .database("reports")
        .collection("daily")
        .cursor_id(99)
        .limit(10)
        .build();
    let read = Read::new(get_more);
    let options = ReadOptions::builder()
        .max_reauthentication_attempts(1)
        .build();

    let first = TestNode::new([unauthorized()]);
    assert!(read
        .execute_with_options(&first, &options)
        .await
        .unwrap_err()
        .is_potential_reconfiguration());

    let second = TestNode::new([Reply::builder().cursor_id(99).build()]);
    let reply = read
        .execute_with_options(&second, &options)
        .await
        .unwrap();
    assert_eq!(reply.cursor_id(), 99);
    assert_eq!(second.processed(), vec![read.operation().clone()]);
}
