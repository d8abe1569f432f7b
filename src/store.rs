use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use crate::{
    entities::movie::{self, Actors},
    models::{MoviePatch, NewMovie},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("movie {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Db(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn list(&self) -> StoreResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().all(&self.db).await?)
    }

    pub async fn get(&self, id: &str) -> StoreResult<movie::Model> {
        movie::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub async fn create(&self, new: NewMovie) -> StoreResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(new.title),
            release_year: Set(new.release_year),
            actors: Set(Actors(new.actors)),
        };

        Ok(model.insert(&self.db).await?)
    }

    pub async fn update(&self, id: &str, patch: MoviePatch) -> StoreResult<movie::Model> {
        let mut model = self.get(id).await?.into_active_model();

        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(release_year) = patch.release_year {
            model.release_year = Set(release_year);
        }
        if let Some(actors) = patch.actors {
            model.actors = Set(Actors(actors));
        }

        match model.update(&self.db).await {
            Ok(updated) => Ok(updated),
            // Deleted between the lookup and the write.
            Err(DbErr::RecordNotUpdated) => Err(StoreError::NotFound(id.to_string())),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let res = movie::Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, db};

    async fn store() -> MovieStore {
        let db = db::connect_and_migrate(&Config::in_memory()).await.unwrap();
        MovieStore::new(db)
    }

    fn inception() -> NewMovie {
        NewMovie {
            title: "Inception".to_string(),
            release_year: 2010,
            actors: vec!["Leonardo DiCaprio".to_string(), "Tom Hardy".to_string()],
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let store = store().await;

        let a = store.create(inception()).await.unwrap();
        let b = store.create(inception()).await.unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "Inception");
        assert_eq!(a.actors, Actors(inception().actors));
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_overwrites_supplied_fields_only() {
        let store = store().await;
        let created = store.create(inception()).await.unwrap();

        let patch = MoviePatch { title: Some("Inception 2".to_string()), ..MoviePatch::default() };
        let updated = store.update(&created.id, patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Inception 2");
        assert_eq!(updated.release_year, 2010);
        assert_eq!(updated.actors, created.actors);
        assert_eq!(store.get(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_ids() {
        let store = store().await;

        let err = store.update("nope", MoviePatch::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "nope"));

        let err = store.delete("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = store().await;
        let keep = store.create(inception()).await.unwrap();
        let gone = store.create(inception()).await.unwrap();

        store.delete(&gone.id).await.unwrap();

        let ids: Vec<_> = store.list().await.unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![keep.id]);
        assert!(matches!(store.delete(&gone.id).await, Err(StoreError::NotFound(_))));
    }
}
