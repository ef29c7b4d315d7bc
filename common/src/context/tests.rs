use std::time::Duration;

use super::*;

#[tokio::test]
async fn test_context_cancel() {
    let (ctx, handler) = Context::new();

    let handle = tokio::spawn(async move {
        ctx.done().await;
    });

    tokio::time::timeout(Duration::from_millis(300), handler.cancel())
        .await
        .expect("task should be cancelled");
    tokio::time::timeout(Duration::from_millis(300), handle)
        .await
        .expect("task should be cancelled")
        .expect("panic in task");
}

#[tokio::test]
async fn test_handler_done_on_drop() {
    let (ctx, mut handler) = Context::new();

    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(ctx);
    });

    tokio::time::timeout(Duration::from_millis(300), handler.done())
        .await
        .expect("handler should resolve once the context is dropped");
    tokio::time::timeout(Duration::from_millis(300), handle)
        .await
        .expect("task should finish")
        .expect("panic in task");
}

#[tokio::test]
async fn test_context_clones_block_cancel() {
    let (ctx, handler) = Context::new();
    let clone = ctx.clone();

    let handle = tokio::spawn(async move {
        clone.done().await;
    });

    drop(ctx);

    tokio::time::timeout(Duration::from_millis(300), handler.cancel())
        .await
        .expect("cancel should resolve once every clone is dropped");
    tokio::time::timeout(Duration::from_millis(300), handle)
        .await
        .expect("task should be cancelled")
        .expect("panic in task");
}
