// End-to-end runtime smoke test (headless)
// - Starts pokedex::app::run in the background with POKEDEX_TEST_HEADLESS=1 (no raw TTY).
// - Points the provider at a closed local port so the startup command fails fast.
// - Waits briefly, then aborts and asserts the task never panicked.

use std::time::Duration;

use pokedex::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("POKEDEX_TEST_HEADLESS", "1");
    }
    let settings = Settings {
        api_base_url: "http://127.0.0.1:9".into(),
        http_timeout_secs: 1,
        ..Settings::default()
    };

    let handle = tokio::spawn(async move { pokedex::app::run(settings).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
