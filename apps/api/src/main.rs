//! # Todos API サーバー
//!
//! タスク（todo）の CRUD を提供する HTTP サービス。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 成功 |
//! |---------|------|------|
//! | GET | `/health` | 200 `{"status":"ok"}` |
//! | GET | `/tasks` | 200 タスク一覧（新しい順） |
//! | POST | `/tasks` | 201 作成されたタスク |
//! | PATCH | `/tasks/{id}` | 200 更新後のタスク |
//! | DELETE | `/tasks/{id}` | 204（対象がなくても成功） |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | No | PostgreSQL 接続 URL |
//! | `ALLOW_ORIGINS` | No | CORS 許可オリジン（カンマ区切り） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todos-api
//!
//! # 本番環境
//! API_PORT=3000 DATABASE_URL=postgres://... cargo run -p todos-api --release
//! ```
//!
//! スキーマは起動時にマイグレーションで自動作成される（適用済みならスキップ）。

use std::{net::SocketAddr, sync::Arc};

use todos_api::{
   app_builder::{build_app, build_cors_layer},
   config::ApiConfig,
   handler::TaskState,
   usecase::TaskUseCaseImpl,
};
use todos_infra::{db, repository::PostgresTaskRepository};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Todos API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,todos=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = ApiConfig::from_env();

   tracing::info!(
      "Todos API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成し、スキーマを自動作成する
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの適用に失敗しました");
   tracing::info!("データベースに接続しました");

   // 依存コンポーネントを初期化
   let task_repository = PostgresTaskRepository::new(pool.clone());
   let usecase = TaskUseCaseImpl::new(task_repository);
   let state = Arc::new(TaskState { usecase });

   // ルーター構築
   let cors = build_cors_layer(&config.allow_origins)?;
   let app = build_app(state, cors);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Todos API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
