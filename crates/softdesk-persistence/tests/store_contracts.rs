//! Store-level guarantees exercised through the `Store` trait object

use std::sync::Arc;

use chrono::NaiveDate;
use softdesk_domain::{
    IssueTag, NewComment, NewIssue, NewProject, NewUser, Priority, Project, ProjectType, Store,
    User,
};
use softdesk_persistence::InMemoryStore;

async fn register(store: &dyn Store, username: &str) -> User {
    store
        .insert_user(NewUser {
            username: username.into(),
            password_hash: "$argon2id$stub".into(),
            birth_date: NaiveDate::from_ymd_opt(1995, 6, 15).unwrap(),
            can_be_contacted: true,
            can_data_be_shared: false,
            is_admin: false,
        })
        .await
        .unwrap()
}

async fn seed_project(store: &dyn Store, author: &User, name: &str) -> Project {
    store
        .create_project(NewProject {
            name: name.into(),
            description: "seeded".into(),
            project_type: ProjectType::Frontend,
            author: author.id(),
        })
        .await
        .unwrap()
}

async fn seed_issue_with_comments(store: &dyn Store, project: &Project, author: &User, comments: usize) {
    let issue = store
        .create_issue(NewIssue {
            project: project.id(),
            name: format!("issue in {}", project.name()),
            description: String::new(),
            priority: Priority::High,
            tag: IssueTag::Feature,
            author: author.id(),
            contributor: None,
        })
        .await
        .unwrap();
    for i in 0..comments {
        store
            .create_comment(NewComment {
                issue: issue.id(),
                description: format!("comment {i}"),
                author: author.id(),
            })
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_project_delete_cascades_to_issues_and_comments() {
    let concrete = Arc::new(InMemoryStore::new());
    let store: Arc<dyn Store> = concrete.clone();
    let alice = register(store.as_ref(), "alice").await;
    let doomed = seed_project(store.as_ref(), &alice, "Doomed").await;
    let kept = seed_project(store.as_ref(), &alice, "Kept").await;

    seed_issue_with_comments(store.as_ref(), &doomed, &alice, 3).await;
    seed_issue_with_comments(store.as_ref(), &doomed, &alice, 2).await;
    seed_issue_with_comments(store.as_ref(), &kept, &alice, 1).await;
    assert_eq!(concrete.counts(), (1, 2, 3, 6));

    store.delete_project(doomed.id()).await.unwrap();

    assert_eq!(concrete.counts(), (1, 1, 1, 1));
    let issues = store.list_issues().await.unwrap();
    assert!(issues.iter().all(|issue| issue.project() == kept.id()));
    assert!(store.find_project(doomed.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_issue_delete_cascades_to_comments() {
    let concrete = Arc::new(InMemoryStore::new());
    let store: Arc<dyn Store> = concrete.clone();
    let alice = register(store.as_ref(), "alice").await;
    let project = seed_project(store.as_ref(), &alice, "Alpha").await;
    seed_issue_with_comments(store.as_ref(), &project, &alice, 4).await;
    seed_issue_with_comments(store.as_ref(), &project, &alice, 1).await;

    let first = store.list_issues().await.unwrap()[0].id();
    store.delete_issue(first).await.unwrap();

    let comments = store.list_comments().await.unwrap();
    assert_eq!(comments.len(), 1);
    assert!(comments.iter().all(|c| c.issue() != first));
    assert!(store.delete_issue(first).await.is_err());
}

#[tokio::test]
async fn test_concurrent_project_creation_keeps_names_unique() {
    let store: Arc<dyn Store> = Arc::new(InMemoryStore::new());
    let alice = register(store.as_ref(), "alice").await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = store.clone();
        let author = alice.id();
        handles.push(tokio::spawn(async move {
            store
                .create_project(NewProject {
                    name: "Contended".into(),
                    description: String::new(),
                    project_type: ProjectType::Ios,
                    author,
                })
                .await
                .is_ok()
        }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap() {
            created += 1;
        }
    }
    assert_eq!(created, 1);
    assert_eq!(store.list_projects().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_sequential_ids_are_never_reused() {
    let store: Arc<dyn Store> = Arc::new(InMemoryStore::new());
    let alice = register(store.as_ref(), "alice").await;
    let first = seed_project(store.as_ref(), &alice, "One").await;
    store.delete_project(first.id()).await.unwrap();
    let second = seed_project(store.as_ref(), &alice, "Two").await;
    assert!(second.id() > first.id());
}
