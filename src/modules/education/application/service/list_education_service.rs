use async_trait::async_trait;

use crate::education::application::ports::incoming::ListEducationUseCase;
use crate::education::application::ports::outgoing::EducationRepository;
use crate::education::domain::Education;
use crate::shared::ContentError;

pub struct ListEducationService<R>
where
    R: EducationRepository,
{
    repository: R,
}

impl<R> ListEducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListEducationUseCase for ListEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Education>, ContentError> {
        Ok(self.repository.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::education::application::ports::outgoing::education_repository::MockEducationRepository;
    use crate::education::application::service::test_fixtures::sample_education;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_list_returns_repository_rows() {
        let row = sample_education(Uuid::new_v4(), &["Dean's list"]);
        let expected = vec![row.clone()];

        let mut repository = MockEducationRepository::new();
        repository
            .expect_list()
            .times(1)
            .returning(move || Ok(vec![row.clone()]));

        let result = ListEducationService::new(repository).execute().await.unwrap();

        assert_eq!(result, expected);
    }
}
