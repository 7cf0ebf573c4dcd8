//! Generic SeaORM building blocks shared by every repository.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, TryIntoModel,
};

use board_core::error::RepoError;

/// Map a SeaORM error onto the repository error space.
pub(crate) fn db_error(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate")
                || err_str.contains("unique")
                || err_str.contains("foreign key")
            {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

pub(crate) async fn find_by_id<E, T, C>(conn: &C, id: i64) -> Result<Option<T>, RepoError>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
    T: From<E::Model>,
{
    let result = E::find_by_id(id).one(conn).await.map_err(db_error)?;

    Ok(result.map(Into::into))
}

/// Insert when the primary key is unset, update otherwise.
pub(crate) async fn save<E, T, C>(conn: &C, entity: T) -> Result<T, RepoError>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel:
        ActiveModelTrait<Entity = E> + ActiveModelBehavior + TryIntoModel<E::Model> + Send,
    T: From<E::Model> + Into<E::ActiveModel>,
{
    let active_model: E::ActiveModel = entity.into();
    let saved = active_model.save(conn).await.map_err(db_error)?;
    let model = saved.try_into_model().map_err(db_error)?;

    Ok(model.into())
}

pub(crate) async fn delete<E, C>(conn: &C, id: i64) -> Result<(), RepoError>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
{
    let result = E::delete_by_id(id).exec(conn).await.map_err(db_error)?;

    if result.rows_affected == 0 {
        return Err(RepoError::NotFound);
    }

    Ok(())
}
