//! Integration tests for the user repository.

use shopshare_core::roles::Role;
use shopshare_db::models::user::{CreateUser, UpdateProfile};
use shopshare_db::repositories::UserRepo;
use sqlx::PgPool;

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Ann".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: Role::Member,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_applies_profile_defaults(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ann@x.com")).await.unwrap();

    assert_eq!(user.email, "ann@x.com");
    assert_eq!(user.role(), Some(Role::Member));
    assert_eq!(user.pincode, 0);
    assert_eq!(user.phone, "");
    assert!(user.profile_picture.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_violates_named_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@x.com")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("dup@x.com"))
        .await
        .expect_err("second insert must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = 'dup@x.com'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_profile_only_touches_given_fields(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("edit@x.com")).await.unwrap();

    let edit = UpdateProfile {
        phone: Some("9876543210".to_string()),
        pincode: Some(411001),
        ..Default::default()
    };
    let updated = UserRepo::update_profile(&pool, user.id, &edit)
        .await
        .unwrap()
        .expect("user exists");

    assert_eq!(updated.name, "Ann");
    assert_eq!(updated.email, "edit@x.com");
    assert_eq!(updated.phone, "9876543210");
    assert_eq!(updated.pincode, 411001);
    assert!(updated.updated_at >= user.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_profile_of_missing_user_returns_none(pool: PgPool) {
    let result = UserRepo::update_profile(&pool, 9999, &UpdateProfile::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_email_is_exact(pool: PgPool) {
    UserRepo::create(&pool, &new_user("case@x.com")).await.unwrap();
    assert!(UserRepo::find_by_email(&pool, "case@x.com").await.unwrap().is_some());
    assert!(UserRepo::find_by_email(&pool, "CASE@x.com").await.unwrap().is_none());
}
