//! Document store collaborator.
//!
//! The pipeline only needs to list collection names and fetch all
//! documents of a collection; everything behind that is the store's
//! business. `MongoStore` is the production implementation, tests plug
//! in their own.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    Client,
    bson::{Bson, Document as BsonDocument, doc},
    options::{ClientOptions, ServerApi, ServerApiVersion},
};

use crate::{
    config::Config,
    error::Error,
    types::{Document, Value},
};

const DB_USER: &str = "locship";
const DB_HOST: &str = "locship-localization.mongodb.net";

#[async_trait]
pub trait DocumentStore {
    /// Names of all collections in the selected logical database.
    async fn collection_names(&self) -> Result<Vec<String>, Error>;

    /// All documents of one collection, in the store's natural order.
    async fn documents(&self, collection: &str) -> Result<Vec<Document>, Error>;
}

/// MongoDB-backed store, scoped to the logical database of the
/// configured platform.
pub struct MongoStore {
    database: mongodb::Database,
}

impl MongoStore {
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        let uri = format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            DB_USER, config.db_password, DB_HOST
        );
        let mut options = ClientOptions::parse(&uri).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        let client = Client::with_options(options)?;
        let database = client.database(config.platform.database());
        Ok(MongoStore { database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn collection_names(&self) -> Result<Vec<String>, Error> {
        Ok(self.database.list_collection_names().await?)
    }

    async fn documents(&self, collection: &str) -> Result<Vec<Document>, Error> {
        let cursor = self
            .database
            .collection::<BsonDocument>(collection)
            .find(doc! {})
            .await?;
        let raw: Vec<BsonDocument> = cursor.try_collect().await?;
        raw.into_iter()
            .map(|doc| convert_document(collection, doc))
            .collect()
    }
}

/// Converts a raw BSON document into the typed ordered model. ObjectIds
/// become their hex string (the identity field is discarded downstream
/// anyway); anything that is not a string or a number is rejected.
fn convert_document(collection: &str, raw: BsonDocument) -> Result<Document, Error> {
    let mut document = Document::new();
    for (key, value) in raw {
        let value = match value {
            Bson::String(s) => Value::String(s),
            Bson::Int32(n) => Value::Integer(n as i64),
            Bson::Int64(n) => Value::Integer(n),
            Bson::Double(n) => Value::Float(n),
            Bson::ObjectId(oid) => Value::String(oid.to_hex()),
            _ => {
                return Err(Error::UnsupportedValue {
                    collection: collection.to_string(),
                    key,
                });
            }
        };
        document.push(key, value);
    }
    Ok(document)
}
