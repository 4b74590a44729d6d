// Async repository behaviour over an in-memory store

use survey_core::errors::ExErrorKind;
use survey_core::model::{NewQuestion, NewSurvey, Survey};
use survey_core_types::Sensitive;
use survey_engine::{CallerScope, Storage, SurveyRepository};

fn repository() -> SurveyRepository {
    SurveyRepository::new(Storage::in_memory().expect("in-memory store"))
}

#[tokio::test]
async fn test_insert_then_get_survey() {
    let repo = repository();
    let scope = CallerScope::new();

    let id = repo
        .insert_survey(&scope, NewSurvey::new("Office", "Seating feedback"))
        .await
        .unwrap();
    let survey = repo.get_survey(&scope, id).await.unwrap();

    assert_eq!(survey, Some(Survey::new(id, "Office", "Seating feedback")));
}

#[tokio::test]
async fn test_absent_results_are_not_errors() {
    let repo = repository();
    let scope = CallerScope::new();

    assert!(repo.get_survey(&scope, 1).await.unwrap().is_none());
    assert!(repo.list_surveys(&scope).await.unwrap().is_empty());
    assert_eq!(repo.delete_survey(&scope, 1).await.unwrap(), 0);
    assert!(repo.load_survey_results(&scope, 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_register_and_login() {
    let repo = repository();
    let scope = CallerScope::new();

    let user = repo
        .register_user(&scope, "alice".to_string(), Sensitive::from("pw"), true)
        .await
        .unwrap();
    assert_eq!(user.username, "alice");
    assert!(user.is_admin);

    let logged_in = repo
        .login(&scope, "alice".to_string(), Sensitive::from("pw"))
        .await
        .unwrap();
    assert_eq!(logged_in.map(|u| u.id), Some(user.id));

    let rejected = repo
        .login(&scope, "alice".to_string(), Sensitive::from("nope"))
        .await
        .unwrap();
    assert!(rejected.is_none());
}

#[tokio::test]
async fn test_register_rejects_taken_username() {
    let repo = repository();
    let scope = CallerScope::new();
    repo.register_user(&scope, "bob".to_string(), Sensitive::from("pw"), false)
        .await
        .unwrap();

    let err = repo
        .register_user(&scope, "bob".to_string(), Sensitive::from("other"), false)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::AlreadyExists);
    assert_eq!(err.entity_id(), Some("bob"));
    assert!(err.request_id().is_some());
    assert_eq!(err.scope_id(), Some(scope.id()));
    assert_eq!(repo.list_users(&scope).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_submit_answers_and_results() {
    let repo = repository();
    let scope = CallerScope::new();
    let user = repo
        .register_user(&scope, "carol".to_string(), Sensitive::from("pw"), false)
        .await
        .unwrap();
    let (survey, questions) = repo
        .create_survey_with_questions(
            &scope,
            NewSurvey::new("Lunch", "Cafeteria"),
            vec!["Food was hot".to_string(), "Staff were friendly".to_string()],
        )
        .await
        .unwrap();

    let ids = repo
        .submit_answers(
            &scope,
            user.id,
            vec![(questions[0].id, 5), (questions[1].id, 2)],
        )
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);

    let results = repo
        .load_survey_results(&scope, survey.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(results.questions[0].distribution.to_lines(), vec!["Strongly Agree: 1"]);
    assert_eq!(results.questions[1].distribution.to_lines(), vec!["Disagree: 1"]);

    let dist = repo
        .question_distribution(&scope, questions[0].id)
        .await
        .unwrap();
    assert_eq!(dist.total(), 1);
}

#[tokio::test]
async fn test_submit_answers_is_all_or_nothing() {
    let repo = repository();
    let scope = CallerScope::new();
    let user = repo
        .register_user(&scope, "dave".to_string(), Sensitive::from("pw"), false)
        .await
        .unwrap();
    let survey_id = repo
        .insert_survey(&scope, NewSurvey::new("S", "D"))
        .await
        .unwrap();
    let q = repo
        .insert_question(&scope, NewQuestion::new(survey_id, "Q"))
        .await
        .unwrap();

    let err = repo
        .submit_answers(&scope, user.id, vec![(q, 4), (q + 1000, 4)])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);

    let err = repo
        .submit_answers(&scope, user.id, vec![(q, 4), (q, 0)])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidAnswerValue);

    assert!(repo
        .list_answers_for_question(&scope, q)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_delete_survey_cascades_through_repository() {
    let repo = repository();
    let scope = CallerScope::new();
    let user = repo
        .register_user(&scope, "erin".to_string(), Sensitive::from("pw"), false)
        .await
        .unwrap();
    let survey_id = repo
        .insert_survey(&scope, NewSurvey::new("S", "D"))
        .await
        .unwrap();
    let ids = repo
        .insert_questions(&scope, NewQuestion::batch(survey_id, ["A", "B"]))
        .await
        .unwrap();
    repo.submit_answers(&scope, user.id, vec![(ids[0], 3), (ids[1], 3)])
        .await
        .unwrap();

    assert_eq!(repo.delete_survey(&scope, survey_id).await.unwrap(), 1);

    assert!(repo.get_question(&scope, ids[0]).await.unwrap().is_none());
    assert!(repo
        .list_answers_by_user(&scope, user.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_sequential_calls_are_ordered() {
    let repo = repository();
    let scope = CallerScope::new();

    for title in ["one", "two", "three"] {
        repo.insert_survey(&scope, NewSurvey::new(title, "d"))
            .await
            .unwrap();
    }

    let titles: Vec<_> = repo
        .list_surveys(&scope)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_concurrent_inserts_get_distinct_ids() {
    let repo = std::sync::Arc::new(repository());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = std::sync::Arc::clone(&repo);
            tokio::spawn(async move {
                let scope = CallerScope::new();
                repo.insert_survey(&scope, NewSurvey::new(format!("S{}", i), "d"))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[tokio::test]
async fn test_reset_store_empties_everything() {
    let repo = repository();
    let scope = CallerScope::new();
    repo.insert_survey(&scope, NewSurvey::new("S", "D"))
        .await
        .unwrap();

    repo.reset_store(&scope).await.unwrap();

    assert!(repo.list_surveys(&scope).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_on_disk_store_survives_reopen() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = survey_store::StoreConfig::on_disk(temp_dir.path().join("nested/survey.db"));

    let id = {
        let repo = SurveyRepository::new(Storage::open(&config).unwrap());
        let scope = CallerScope::new();
        repo.insert_survey(&scope, NewSurvey::new("Kept", "On disk"))
            .await
            .unwrap()
    };

    let repo = SurveyRepository::new(Storage::open(&config).unwrap());
    let scope = CallerScope::new();
    let survey = repo.get_survey(&scope, id).await.unwrap();

    assert_eq!(survey, Some(Survey::new(id, "Kept", "On disk")));
}
