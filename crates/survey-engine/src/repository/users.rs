use survey_core::model::{NewUser, User, UserId};
use survey_core::rules::validate_new_user;
use survey_core::SurveyError;
use survey_core_types::Sensitive;
use survey_store::errors::Result;
use survey_store::SqliteRepo;

use super::SurveyRepository;
use crate::scope::CallerScope;

impl SurveyRepository {
    /// Register a new account
    ///
    /// Checks the username is free before hashing, so a taken name fails
    /// fast with `AlreadyExists`. The check and insert share one lock hold.
    pub async fn register_user(
        &self,
        scope: &CallerScope,
        username: String,
        password: Sensitive<String>,
        is_admin: bool,
    ) -> Result<User> {
        let new_user = NewUser {
            username,
            password,
            is_admin,
        };
        self.dispatch(scope, "register_user", move |conn| {
            validate_new_user(&new_user)?;
            if SqliteRepo::find_user_by_username(conn, &new_user.username)?.is_some() {
                return Err(SurveyError::UsernameTaken {
                    username: new_user.username.clone(),
                }
                .into());
            }
            let id = SqliteRepo::insert_user(conn, &new_user)?;
            SqliteRepo::get_user(conn, id)?.ok_or_else(|| {
                survey_core::ExError::new(survey_core::ExErrorKind::Internal)
                    .with_op("register_user")
                    .with_entity_id(id)
                    .with_message("inserted user not readable")
            })
        })
        .await
    }

    /// `None` for an unknown username or a wrong password
    pub async fn login(
        &self,
        scope: &CallerScope,
        username: String,
        password: Sensitive<String>,
    ) -> Result<Option<User>> {
        self.dispatch(scope, "login", move |conn| {
            SqliteRepo::get_user_by_credentials(conn, &username, &password)
        })
        .await
    }

    pub async fn insert_user(&self, scope: &CallerScope, user: NewUser) -> Result<UserId> {
        self.dispatch(scope, "insert_user", move |conn| {
            SqliteRepo::insert_user(conn, &user)
        })
        .await
    }

    /// Username and admin flag only; see [`Self::set_user_password`]
    pub async fn update_user(&self, scope: &CallerScope, user: User) -> Result<usize> {
        self.dispatch(scope, "update_user", move |conn| {
            SqliteRepo::update_user(conn, &user)
        })
        .await
    }

    pub async fn set_user_password(
        &self,
        scope: &CallerScope,
        user_id: UserId,
        password: Sensitive<String>,
    ) -> Result<usize> {
        self.dispatch(scope, "set_user_password", move |conn| {
            SqliteRepo::set_user_password(conn, user_id, &password)
        })
        .await
    }

    pub async fn delete_user(&self, scope: &CallerScope, user_id: UserId) -> Result<usize> {
        self.dispatch(scope, "delete_user", move |conn| {
            SqliteRepo::delete_user(conn, user_id)
        })
        .await
    }

    pub async fn get_user(&self, scope: &CallerScope, user_id: UserId) -> Result<Option<User>> {
        self.dispatch(scope, "get_user", move |conn| {
            SqliteRepo::get_user(conn, user_id)
        })
        .await
    }

    pub async fn find_user_by_username(
        &self,
        scope: &CallerScope,
        username: String,
    ) -> Result<Option<User>> {
        self.dispatch(scope, "find_user_by_username", move |conn| {
            SqliteRepo::find_user_by_username(conn, &username)
        })
        .await
    }

    pub async fn list_users(&self, scope: &CallerScope) -> Result<Vec<User>> {
        self.dispatch(scope, "list_users", |conn| SqliteRepo::list_users(conn))
            .await
    }

    pub async fn list_admin_users(&self, scope: &CallerScope) -> Result<Vec<User>> {
        self.dispatch(scope, "list_admin_users", |conn| {
            SqliteRepo::list_admin_users(conn)
        })
        .await
    }
}
