use uuid::Uuid;

use wellbeat_api::error::ApiServiceError;
use wellbeat_api::usecase::assessment::{
    AssessmentInput, CreateAssessmentUseCase, DeleteAssessmentUseCase, GetAssessmentUseCase,
    ListMyAssessmentsUseCase, UpdateAssessmentUseCase,
};
use wellbeat_domain::level::Level;
use wellbeat_domain::links::NoFilter;
use wellbeat_domain::pagination::PageQuery;

use crate::helpers::InMemoryAssessments;

fn input(mood: i16, stress: i16, workload: i16) -> AssessmentInput {
    AssessmentInput {
        mood,
        stress,
        workload,
        notes: None,
    }
}

#[tokio::test]
async fn create_then_list_first_page_carries_self_link_but_no_previous() {
    let assessments = InMemoryAssessments::default();
    let user = Uuid::now_v7();

    let create = CreateAssessmentUseCase {
        assessments: assessments.clone(),
    };
    let created = create.execute(user, input(4, 3, 4)).await.unwrap();
    assert_eq!(created.mood, Level::High);

    let list = ListMyAssessmentsUseCase { assessments };
    let page = list
        .execute(
            user,
            PageQuery {
                page_number: 1,
                page_size: 10,
            },
        )
        .await
        .unwrap()
        .with_links("/api/v1/selfassessments/my", &NoFilter {});

    assert_eq!(page.total_count, 1);
    assert!(page.items.iter().any(|a| a.id == created.id));
    assert!(page.links.iter().any(|l| l.rel == "self"));
    assert!(!page.links.iter().any(|l| l.rel == "previous"));
    assert!(!page.has_previous);
}

#[tokio::test]
async fn pagination_walks_own_records_newest_first() {
    let assessments = InMemoryAssessments::default();
    let user = Uuid::now_v7();

    let create = CreateAssessmentUseCase {
        assessments: assessments.clone(),
    };
    for rank in 1..=5 {
        create.execute(user, input(rank, 3, 3)).await.unwrap();
    }

    let list = ListMyAssessmentsUseCase { assessments };
    let first = list
        .execute(
            user,
            PageQuery {
                page_number: 1,
                page_size: 2,
            },
        )
        .await
        .unwrap()
        .with_links("/api/v1/selfassessments/my", &NoFilter {});

    assert_eq!(first.total_count, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 2);
    // Newest first: the last-created assessment (mood 5) leads.
    assert_eq!(first.items[0].mood, Level::VeryHigh);
    assert!(first.has_next);
    assert!(first.links.iter().any(|l| l.rel == "next"));

    let last = list
        .execute(
            user,
            PageQuery {
                page_number: 3,
                page_size: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(last.items.len(), 1);
    assert!(!last.has_next);
    assert!(last.has_previous);
}

#[tokio::test]
async fn page_past_the_end_is_empty_not_an_error() {
    let assessments = InMemoryAssessments::default();
    let user = Uuid::now_v7();
    CreateAssessmentUseCase {
        assessments: assessments.clone(),
    }
    .execute(user, input(3, 3, 3))
    .await
    .unwrap();

    let list = ListMyAssessmentsUseCase { assessments };
    let page = list
        .execute(
            user,
            PageQuery {
                page_number: 9,
                page_size: 10,
            },
        )
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 1);
    assert!(!page.has_next);
}

#[tokio::test]
async fn foreign_records_are_invisible_across_all_operations() {
    let assessments = InMemoryAssessments::default();
    let owner = Uuid::now_v7();
    let intruder = Uuid::now_v7();

    let create = CreateAssessmentUseCase {
        assessments: assessments.clone(),
    };
    let created = create.execute(owner, input(4, 4, 4)).await.unwrap();

    let get = GetAssessmentUseCase {
        assessments: assessments.clone(),
    };
    assert!(matches!(
        get.execute(intruder, created.id).await,
        Err(ApiServiceError::AssessmentNotFound)
    ));

    let update = UpdateAssessmentUseCase {
        assessments: assessments.clone(),
    };
    assert!(matches!(
        update.execute(intruder, created.id, input(1, 1, 1)).await,
        Err(ApiServiceError::AssessmentNotFound)
    ));

    let delete = DeleteAssessmentUseCase {
        assessments: assessments.clone(),
    };
    assert!(matches!(
        delete.execute(intruder, created.id).await,
        Err(ApiServiceError::AssessmentNotFound)
    ));

    // Owner still sees the untouched record.
    let mine = get.execute(owner, created.id).await.unwrap();
    assert_eq!(mine.mood, Level::High);
}

#[tokio::test]
async fn deleted_assessment_disappears_from_listing() {
    let assessments = InMemoryAssessments::default();
    let user = Uuid::now_v7();

    let create = CreateAssessmentUseCase {
        assessments: assessments.clone(),
    };
    let created = create.execute(user, input(3, 3, 3)).await.unwrap();

    DeleteAssessmentUseCase {
        assessments: assessments.clone(),
    }
    .execute(user, created.id)
    .await
    .unwrap();

    let page = ListMyAssessmentsUseCase { assessments }
        .execute(user, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total_count, 0);
    assert!(page.items.is_empty());
}
