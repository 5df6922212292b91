use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use parlo_config::MemoryStore;
use parlo_lang::NoLocaleNames;
use parlo_providers::lingva::Lingva;
use parlo_providers::{AUTO_LANG, ProviderErrorKind, TranslationProvider};

fn provider_for(server: &MockServer) -> Lingva {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let provider = Lingva::new(Arc::new(MemoryStore::new()), Arc::new(NoLocaleNames));
    let instance = format!("localhost:{}", server.address().port());
    provider.context().settings.set_instance_url(&instance);
    provider
}

async fn mount_languages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "languages": [
                {"code": "auto", "name": "Detect"},
                {"code": "en", "name": "English"},
                {"code": "es", "name": "Spanish"},
                {"code": "zh", "name": "Chinese"},
                {"code": "zh_HANT", "name": "Chinese (Traditional)"},
            ],
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn init_trans_registers_aliased_languages() {
    let server = MockServer::start().await;
    mount_languages(&server).await;

    let mut provider = provider_for(&server);
    provider.init_trans().await.expect("init");

    let langs = &provider.context().langs;
    // "auto" is skipped; Chinese codes land in the canonical space.
    assert_eq!(langs.languages, vec!["en", "es", "zh-CN", "zh-TW"]);
    assert!(langs.tts_languages.is_empty());
    assert_eq!(langs.denormalize("zh-CN"), "zh");
    assert_eq!(langs.denormalize("zh-TW"), "zh_HANT");
}

#[tokio::test]
async fn init_tts_populates_the_speech_list() {
    let server = MockServer::start().await;
    mount_languages(&server).await;

    let mut provider = provider_for(&server);
    provider.init_tts().await.expect("init");

    let langs = &provider.context().langs;
    assert!(langs.languages.is_empty());
    assert_eq!(langs.tts_languages, vec!["en", "es", "zh-CN", "zh-TW"]);
    assert!(langs.supports_tts("zh-TW"));
}

#[tokio::test]
async fn translate_denormalizes_codes_into_the_path() {
    let server = MockServer::start().await;
    mount_languages(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/en/zh_HANT/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translation": "哈囉"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut provider = provider_for(&server);
    provider.init_trans().await.expect("init");

    let translation = provider
        .translate("hello", "en", "zh-TW")
        .await
        .expect("translate");
    assert_eq!(translation.text, "哈囉");
    assert_eq!(translation.original.dest, "zh-TW");
    assert_eq!(provider.context().history.len(), 1);
}

#[tokio::test]
async fn auto_source_carries_detection_and_pronunciation() {
    let server = MockServer::start().await;
    mount_languages(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auto/es/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translation": "hola",
            "info": {
                "detectedSource": "en",
                "pronunciation": {"translation": "OH-lah"},
            },
        })))
        .mount(&server)
        .await;

    let mut provider = provider_for(&server);
    provider.init_trans().await.expect("init");

    let translation = provider
        .translate("hello", AUTO_LANG, "es")
        .await
        .expect("translate");
    assert_eq!(translation.detected.as_deref(), Some("en"));
    assert_eq!(translation.pronunciation.src, None);
    assert_eq!(translation.pronunciation.dest.as_deref(), Some("OH-lah"));
}

#[tokio::test]
async fn empty_text_fails_before_any_transport() {
    let server = MockServer::start().await;
    mount_languages(&server).await;

    let mut provider = provider_for(&server);
    provider.init_trans().await.expect("init");
    let requests_after_init = server
        .received_requests()
        .await
        .expect("request recording is on")
        .len();

    let err = provider.translate("", "en", "es").await.unwrap_err();
    assert_eq!(err.kind, ProviderErrorKind::Empty);

    let requests_now = server
        .received_requests()
        .await
        .expect("request recording is on")
        .len();
    assert_eq!(requests_now, requests_after_init);
}

#[tokio::test]
async fn backend_failures_map_to_translation_failed() {
    let server = MockServer::start().await;
    mount_languages(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/en/es/hello"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let mut provider = provider_for(&server);
    provider.init_trans().await.expect("init");

    let err = provider.translate("hello", "en", "es").await.unwrap_err();
    assert_eq!(err.kind, ProviderErrorKind::TranslationFailed);
}

#[tokio::test]
async fn speech_decodes_the_audio_byte_array() {
    let server = MockServer::start().await;
    mount_languages(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/audio/en/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"audio": [82, 73, 70, 70]})))
        .mount(&server)
        .await;

    let mut provider = provider_for(&server);
    provider.init_tts().await.expect("init");

    let audio = provider.speech("hello", "en").await.expect("speech");
    assert_eq!(audio, vec![82, 73, 70, 70]);
}

#[tokio::test]
async fn speech_backend_failure_maps_to_tts_failed() {
    let server = MockServer::start().await;
    mount_languages(&server).await;

    let mut provider = provider_for(&server);
    provider.init_tts().await.expect("init");

    let err = provider.speech("hello", "en").await.unwrap_err();
    assert_eq!(err.kind, ProviderErrorKind::TtsFailed);
}

#[tokio::test]
async fn validate_instance_probes_a_sample_translation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/en/es/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translation": "hola"})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let instance = format!("localhost:{}", server.address().port());
    assert!(provider.validate_instance(&instance).await.expect("validate"));
}

#[tokio::test]
async fn validate_instance_rejects_other_services() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/en/es/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not lingva</html>"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let instance = format!("localhost:{}", server.address().port());
    assert!(!provider.validate_instance(&instance).await.expect("validate"));
}
