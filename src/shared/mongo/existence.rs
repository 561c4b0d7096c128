use mongodb::{bson::Document, options::Collation, Collection};

/// True when at least one document matches `filter`.
pub async fn document_exists<T>(
    collection: &Collection<T>,
    filter: Document,
    collation: Option<Collation>,
) -> mongodb::error::Result<bool>
where
    T: Send + Sync,
{
    let mut count = collection.count_documents(filter).limit(1);
    if let Some(collation) = collation {
        count = count.collation(collation);
    }
    Ok(count.await? > 0)
}

/// Negation of [`document_exists`].
pub async fn document_absent<T>(
    collection: &Collection<T>,
    filter: Document,
    collation: Option<Collation>,
) -> mongodb::error::Result<bool>
where
    T: Send + Sync,
{
    Ok(!document_exists(collection, filter, collation).await?)
}
