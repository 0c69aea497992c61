//! Role service integration tests against the in-memory repository

use std::sync::Arc;

use role_service::application::{RoleError, RoleService};
use role_service::domain::role::{RoleParam, RoleRepository};
use role_service::infrastructure::persistence::InMemoryRoleRepository;

fn setup() -> (RoleService, InMemoryRoleRepository) {
    let repo = InMemoryRoleRepository::new();
    let service = RoleService::new(Arc::new(repo.clone()));
    (service, repo)
}

#[tokio::test]
async fn test_create_then_list_on_empty_store() {
    let (service, _repo) = setup();

    let created = service
        .create(RoleParam::with_name("admin"))
        .await
        .expect("Failed to create role")
        .into_data()
        .unwrap();
    assert_eq!(created.name, "admin");
    assert_eq!(created.message.as_deref(), Some("Create role success."));

    let all = service.get_all_roles().await.unwrap().into_data().unwrap();
    assert_eq!(all.roles.len(), 1);
    assert_eq!(all.roles[0].name, "admin");
    assert_eq!(all.roles[0].id, created.id);
}

#[tokio::test]
async fn test_created_role_is_found_by_id() {
    let (service, _repo) = setup();

    for name in ["admin", "operator", "auditor"] {
        let created = service
            .create(RoleParam::with_name(name))
            .await
            .unwrap()
            .into_data()
            .unwrap();

        let shown = service
            .get_role_by_id(RoleParam::with_id(created.id.unwrap()))
            .await
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(shown.name, name);
        assert_eq!(shown.message.as_deref(), Some("Show role success."));
    }
}

#[tokio::test]
async fn test_duplicate_name_leaves_store_unchanged() {
    let (service, repo) = setup();
    service.create(RoleParam::with_name("admin")).await.unwrap();

    let err = service
        .create(RoleParam::with_name("admin").description("Second admin"))
        .await
        .unwrap_err();

    assert_eq!(err, RoleError::DuplicateName("admin".to_string()));
    assert_eq!(repo.len().await, 1);
    let stored = repo.find_by_name("admin").await.unwrap().unwrap();
    assert_eq!(stored.description, None);
}

#[tokio::test]
async fn test_get_all_roles_matches_store_by_identity() {
    let (service, repo) = setup();
    let mut ids = Vec::new();
    for name in ["a", "b", "c", "d"] {
        let vo = service
            .create(RoleParam::with_name(name))
            .await
            .unwrap()
            .into_data()
            .unwrap();
        ids.push(vo.id.unwrap());
    }

    let all = service.get_all_roles().await.unwrap().into_data().unwrap();
    let listed: Vec<i64> = all.roles.iter().filter_map(|vo| vo.id).collect();

    assert_eq!(listed, ids);
    assert_eq!(all.roles.len(), repo.len().await);
}

#[tokio::test]
async fn test_get_all_roles_on_empty_store() {
    let (service, _repo) = setup();

    let all = service.get_all_roles().await.unwrap().into_data().unwrap();
    assert!(all.roles.is_empty());
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (service, _repo) = setup();

    let err = service
        .get_role_by_id(RoleParam::with_id(404))
        .await
        .unwrap_err();
    assert_eq!(err, RoleError::RoleNotFound(404));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (service, repo) = setup();

    let err = service
        .update(RoleParam::with_id(404).description("Nobody"))
        .await
        .unwrap_err();

    assert_eq!(err, RoleError::RoleNotFound(404));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_update_and_delete() {
    let (service, repo) = setup();
    let admin = service
        .create(RoleParam::with_name("admin"))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    let ops = service
        .create(RoleParam::with_name("ops"))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    let ops_id = ops.id.unwrap();

    // Renaming onto a taken name fails
    let rename = RoleParam {
        id: Some(ops_id),
        name: Some("admin".to_string()),
        description: None,
    };
    assert_eq!(
        service.update(rename).await.unwrap_err(),
        RoleError::DuplicateName("admin".to_string())
    );

    let rename = RoleParam {
        id: Some(ops_id),
        name: Some("operators".to_string()),
        description: Some("On-call staff".to_string()),
    };
    let updated = service.update(rename).await.unwrap().into_data().unwrap();
    assert_eq!(updated.id, Some(ops_id));
    assert_eq!(updated.name, "operators");
    assert_eq!(updated.description.as_deref(), Some("On-call staff"));

    service.delete(RoleParam::with_id(ops_id)).await.unwrap();
    assert_eq!(repo.len().await, 1);
    assert_eq!(
        service.delete(RoleParam::with_id(ops_id)).await.unwrap_err(),
        RoleError::RoleNotFound(ops_id)
    );

    // The remaining role is untouched
    let shown = service
        .get_role_by_id(RoleParam::with_id(admin.id.unwrap()))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(shown.name, "admin");
}

#[tokio::test]
async fn test_concurrent_creates_with_same_name() {
    let (service, repo) = setup();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.create(RoleParam::with_name("admin")).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(err) => assert_eq!(err, RoleError::DuplicateName("admin".to_string())),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.len().await, 1);
}
