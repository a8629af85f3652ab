
mod dev_db;

use std::env;
use tokio::sync::OnceCell;

use crate::model::ModelManager;

pub async fn init_dev() {
    static INIT: OnceCell<()> = OnceCell::const_new();

    INIT.get_or_init(|| async {
        dev_db::init_dev_db().await.unwrap();
    })
    .await;
}

pub async fn init_test() -> ModelManager {
    static INIT: OnceCell<ModelManager> = OnceCell::const_new();

    let mm = INIT
        .get_or_init(|| async {
            // Point the config at the dev store unless the caller chose one.
            if env::var("SERVICE_DB_URL").is_err() {
                env::set_var("SERVICE_DB_URL", dev_db::PG_DEV_APP_URL);
            }
            if env::var("SERVICE_WEB_FOLDER").is_err() {
                env::set_var("SERVICE_WEB_FOLDER", "web_folder/");
            }

            init_dev().await;
            ModelManager::new().await.unwrap()
        })
        .await;

    mm.clone()
}
