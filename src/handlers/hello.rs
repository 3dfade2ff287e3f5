use crate::hello::run_hello;

pub async fn handle_hello(no_dialog: bool) -> crate::Result<()> {
    run_hello(!no_dialog).await;
    Ok(())
}
