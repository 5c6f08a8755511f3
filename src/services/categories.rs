//! Category workflows. Every successful mutation refreshes the cached
//! directory; failures leave the cache untouched and surface the service's
//! message verbatim.

use validator::Validate;

use crate::directory::CategoryDirectory;
use crate::forms::categories::{AddCategoryForm, RenameCategoryForm};
use crate::forms::validation_messages;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

pub async fn add_category<R>(
    repo: &R,
    directory: &CategoryDirectory,
    form: AddCategoryForm,
) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(validation_messages(&errors)));
    }

    repo.create_category(form.name.trim()).await.map_err(|err| {
        log::error!("Failed to create category: {err}");
        ServiceError::from(err)
    })?;

    directory.refresh(repo).await.map_err(|err| {
        log::error!("Failed to refresh categories after create: {err}");
        ServiceError::from(err)
    })
}

pub async fn rename_category<R>(
    repo: &R,
    directory: &CategoryDirectory,
    form: RenameCategoryForm,
) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(validation_messages(&errors)));
    }

    // The existing name must resolve against the cache before the rename
    // goes out.
    let existing = directory
        .find_by_name(form.existing.trim())
        .await
        .ok_or(ServiceError::NotFound)?;

    repo.rename_category(&existing.category_name, form.new_name.trim())
        .await
        .map_err(|err| {
            log::error!("Failed to rename category: {err}");
            ServiceError::from(err)
        })?;

    directory.refresh(repo).await.map_err(|err| {
        log::error!("Failed to refresh categories after rename: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockCatalog;

    #[tokio::test]
    async fn create_refreshes_the_directory() {
        let directory = CategoryDirectory::new();
        let mut repo = MockCatalog::new();
        repo.expect_create_category()
            .withf(|name| name == "birds")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![Category::new("birds")]));

        let form = AddCategoryForm {
            name: " birds ".to_string(),
        };
        add_category(&repo, &directory, form)
            .await
            .expect("create succeeds");

        assert!(directory.find_by_name("birds").await.is_some());
    }

    #[tokio::test]
    async fn conflict_surfaces_verbatim_and_skips_the_refresh() {
        let directory = CategoryDirectory::new();
        let mut repo = MockCatalog::new();
        repo.expect_create_category().times(1).returning(|_| {
            Err(RepositoryError::Business(vec![
                "Category already exists".to_string(),
            ]))
        });
        repo.expect_list_categories().times(0);

        let form = AddCategoryForm {
            name: "birds".to_string(),
        };
        let result = add_category(&repo, &directory, form).await;

        match result {
            Err(err @ ServiceError::Business(_)) => {
                assert_eq!(err.lines(), vec!["Category already exists".to_string()]);
            }
            other => panic!("expected business error, got {other:?}"),
        }
        assert!(directory.list().await.is_empty());
    }

    #[tokio::test]
    async fn rename_requires_the_existing_name_in_the_cache() {
        let directory = CategoryDirectory::new();
        let mut repo = MockCatalog::new();
        repo.expect_rename_category().times(0);

        let form = RenameCategoryForm {
            existing: "ghosts".to_string(),
            new_name: "spirits".to_string(),
        };
        let result = rename_category(&repo, &directory, form).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn rename_hits_the_old_name_and_refreshes() {
        let directory = CategoryDirectory::new();
        {
            let mut seed = MockCatalog::new();
            seed.expect_list_categories()
                .return_once(|| Ok(vec![Category::new("dogs")]));
            directory.refresh(&seed).await.expect("seed directory");
        }

        let mut repo = MockCatalog::new();
        repo.expect_rename_category()
            .withf(|existing, new_name| existing == "dogs" && new_name == "hounds")
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![Category::new("hounds")]));

        let form = RenameCategoryForm {
            existing: "dogs".to_string(),
            new_name: " hounds ".to_string(),
        };
        rename_category(&repo, &directory, form)
            .await
            .expect("rename succeeds");

        assert!(directory.find_by_name("hounds").await.is_some());
        assert!(directory.find_by_name("dogs").await.is_none());
    }
}
