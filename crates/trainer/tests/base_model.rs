use serde::Deserialize;
use trainer::{
    error::TrainerError,
    model::{AnyBaseModel, BaseModel},
    training_info::{GetTrainingInfoResponse, TrainingStatus, TrainingStatusResponse},
};

#[test]
fn canonical_strings_round_trip() {
    let canonical = [
        "GPT_3_5_TURBO",
        "LLAMA2_13b",
        "LLAMA2_7b",
        "MISTRAL_7b",
        "OPENHERMES_2_5",
        "ZEPHYR_7B_BETA",
    ];
    for s in canonical {
        let model: BaseModel = s.parse().unwrap();
        assert_eq!(model.as_str(), s);
    }
    let listed: Vec<_> = BaseModel::iter().map(BaseModel::as_str).collect();
    assert_eq!(listed, canonical);
}

#[test]
fn documented_scenarios() {
    assert_eq!(
        "GPT_3_5_TURBO".parse::<BaseModel>().unwrap(),
        BaseModel::Gpt3_5Turbo
    );
    assert_eq!(
        "LLAMA2_13b".parse::<BaseModel>().unwrap(),
        BaseModel::Llama2_13B
    );
    assert!(matches!(
        "LLAMA2_13B".parse::<BaseModel>(),
        Err(TrainerError::UnrecognizedValue { .. })
    ));
    assert_eq!(BaseModel::Mistral7B.to_string(), "MISTRAL_7b");
    assert!(matches!(
        "".parse::<BaseModel>(),
        Err(TrainerError::UnrecognizedValue { .. })
    ));
}

#[derive(Debug, Deserialize)]
struct FineTuneRow {
    slug: String,
    base_model: AnyBaseModel,
}

#[test]
fn lenient_rows_keep_unknown_models() -> anyhow::Result<()> {
    let rows: Vec<FineTuneRow> = serde_json::from_str(
        r#"[
            {"slug": "support-bot", "base_model": "OPENHERMES_2_5"},
            {"slug": "legacy", "base_model": "LLAMA1_65b"}
        ]"#,
    )?;

    assert_eq!(rows[0].slug, "support-bot");
    assert_eq!(rows[0].base_model.known(), Some(BaseModel::OpenHermes2_5));
    assert_eq!(rows[1].base_model, AnyBaseModel::Other("LLAMA1_65b".into()));
    assert_eq!(rows[1].base_model.to_string(), "LLAMA1_65b");
    Ok(())
}

#[test]
fn training_job_bodies() -> anyhow::Result<()> {
    let info = GetTrainingInfoResponse::from_json(
        r#"{"base_model": "LLAMA2_13b", "hugging_face_model_id": "acme/ft-llama"}"#,
    )?;
    assert_eq!(info.base_model, BaseModel::Llama2_13B);
    assert_eq!(info.hugging_face_model_id.as_deref(), Some("acme/ft-llama"));

    let status = TrainingStatusResponse::from_json(r#"{"status": "training"}"#)?;
    assert_eq!(status.status, TrainingStatus::Running);

    assert!(GetTrainingInfoResponse::from_json(r#"{"base_model": "llama2_13b"}"#).is_err());
    Ok(())
}

#[test]
fn types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<BaseModel>();
    assert_send_sync::<AnyBaseModel>();
    assert_send_sync::<TrainerError>();
    assert_send_sync::<GetTrainingInfoResponse>();
}
