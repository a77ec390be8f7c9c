//! Shared test support: a small labeled corpus and a model trained from it
//! through the public training interface.

#![allow(dead_code)]

use honbun::{
    CrfTrainer, EmailBodyExtractor, ExtractedFeatures, Label, TrainingConfig, content_filter,
    features, normalizer, structural,
};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use honbun::Label::{Body as B, Closing as C, Greeting as G, Other as O, Quote as Q, Signature as S};

/// Train the shared test model once per test binary.
pub fn trained_model_path() -> PathBuf {
    static MODEL: OnceLock<PathBuf> = OnceLock::new();
    MODEL
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("create temp dir");
            let path = dir.path().join("email-body.crfsuite");
            train_model(&path);
            // Keep the tempdir alive for the life of the test process.
            std::mem::forget(dir);
            path
        })
        .clone()
}

pub fn extractor() -> EmailBodyExtractor {
    extractor_with_threshold(0.5)
}

pub fn extractor_with_threshold(threshold: f64) -> EmailBodyExtractor {
    EmailBodyExtractor::with_options(Some(trained_model_path()), threshold)
        .expect("construct extractor")
}

/// Run the inference featurization over raw email text.
pub fn featurize(text: &str) -> ExtractedFeatures {
    let normalized = normalizer::normalize(text).expect("normalize");
    let filtered = content_filter::filter(&normalized);
    let analysis = structural::analyze(&filtered);
    features::extract(&analysis)
}

fn train_model(path: &Path) {
    let mut trainer = CrfTrainer::new(TrainingConfig::default()).expect("create trainer");
    for (text, labels) in training_corpus() {
        let features = featurize(&text);
        trainer
            .add_sequence(&features, &labels)
            .expect("add training sequence");
    }
    trainer.train(path).expect("train model");
}

/// Synthetic labeled emails covering the transitions the extractor must
/// handle: formal mail with signatures, inline and trailing quotes,
/// forwarded threads, bracketed info blocks, and non-Japanese noise.
/// Labels are given per content line (blanks are filtered by the pipeline).
fn training_corpus() -> Vec<(String, Vec<Label>)> {
    vec![
        (
            [
                "お世話になっております。",
                "山田です。",
                "",
                "資料を添付いたします。",
                "ご確認よろしくお願いいたします。",
                "",
                "--",
                "山田太郎",
                "株式会社テスト",
                "TEL: 03-1234-5678",
            ]
            .join("\n"),
            vec![G, B, B, C, S, S, S, S],
        ),
        (
            [
                "いつもお世話になっております。",
                "株式会社サンプルの佐藤です。",
                "",
                "来週の打ち合わせの日程についてご連絡いたします。",
                "候補日は以下の通りです。",
                "・6月1日 (月) 14:00",
                "・6月3日 (水) 10:00",
                "",
                "ご都合をお聞かせください。",
                "よろしくお願いいたします。",
                "",
                "====================",
                "佐藤花子",
                "株式会社サンプル 営業部",
                "Email: sato@example.co.jp",
                "====================",
            ]
            .join("\n"),
            vec![G, B, B, B, B, B, B, C, S, S, S, S, S],
        ),
        (
            [
                "田中様",
                "",
                "ご連絡ありがとうございます。",
                "",
                "> 前回のミーティングの資料を送ってください",
                "",
                "承知いたしました。本日中にお送りします。",
                "",
                "よろしくお願いいたします。",
                "",
                "--",
                "鈴木一郎",
            ]
            .join("\n"),
            vec![G, G, Q, B, C, S, S],
        ),
        (
            [
                "お世話になっております。",
                "了解いたしました。",
                "明日までに対応いたします。",
                "よろしくお願いします。",
                "",
                "-----Original Message-----",
                "From: yamada@example.com",
                "> 添付の資料をご確認ください",
                "> 期限は明日までです",
            ]
            .join("\n"),
            vec![G, B, B, C, O, O, Q, Q],
        ),
        (
            [
                "2024年1月15日 田中様 wrote:",
                "> お疲れ様です",
                "> 進捗はいかがでしょうか",
                "",
                "進捗は順調です。",
                "来週には完了予定です。",
                "",
                "高橋",
            ]
            .join("\n"),
            vec![O, Q, Q, B, B, S],
        ),
        (
            [
                "お世話になっております。",
                "資料を添付いたします。",
                "",
                "★---★",
                "【添付ファイルについて】",
                "★---★",
                "",
                "内容をご確認ください。",
                "よろしくお願いいたします。",
            ]
            .join("\n"),
            vec![G, B, O, B, O, B, C],
        ),
        (
            [
                "株式会社テスト",
                "山田太郎",
                "TEL: 03-1234-5678",
                "Email: yamada@example.co.jp",
            ]
            .join("\n"),
            vec![S, S, S, S],
        ),
        (
            [
                "会議は15時からに変更になりました。",
                "場所は第2会議室です。",
                "資料は事前に共有します。",
            ]
            .join("\n"),
            vec![B, B, B],
        ),
        (
            [
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
                "Sed do eiusmod tempor incididunt ut labore.",
                "Ut enim ad minim veniam, quis nostrud exercitation.",
            ]
            .join("\n"),
            vec![O, O, O],
        ),
        (
            [
                "お疲れ様です。",
                "総務部の伊藤です。",
                "",
                "経費精算の締め切りは今月末です。",
                "期限までにご提出ください。",
                "",
                "以上、よろしくお願いいたします。",
                "",
                "伊藤",
            ]
            .join("\n"),
            vec![G, B, B, B, C, S],
        ),
        (
            [
                "ご返信ありがとうございます。",
                "> > 最初の質問",
                "> 前回の回答",
                "追加の質問があります。",
                "お手数ですが、ご確認ください。",
            ]
            .join("\n"),
            vec![G, Q, Q, B, C],
        ),
        (
            [
                "お世話になっております。田中です。",
                "",
                "見積書を送付いたします。",
                "ご査収のほどよろしくお願いいたします。",
                "",
                "--",
                "田中花子",
                "有限会社デモ",
                "FAX: 06-9876-5432",
            ]
            .join("\n"),
            vec![G, B, C, S, S, S, S],
        ),
        (
            ["お世話になっております。", "よろしくお願いいたします。"].join("\n"),
            vec![G, C],
        ),
        (
            [
                "お世話になっております。開発部の中村です。",
                "",
                "新システムの進捗を報告します。",
                "設計フェーズが完了しました。",
                "実装は来月から開始します。",
                "テストは8月を予定しています。",
                "",
                "スケジュールに変更があれば連絡します。",
                "何卒よろしくお願いいたします。",
                "",
                "━━━━━━━━━━",
                "中村次郎 (ナカムラジロウ)",
                "株式会社開発 開発部 部長",
                "〒100-0001 東京都千代田区1-2-3",
                "https://www.example.co.jp",
                "━━━━━━━━━━",
            ]
            .join("\n"),
            vec![G, B, B, B, B, B, C, S, S, S, S, S, S],
        ),
    ]
}
