use honbun::patterns::*;

// --- greetings ---

#[test]
fn test_business_greetings() {
    assert!(is_greeting_line("お世話になっております。"));
    assert!(is_greeting_line("いつも大変お世話になっております。"));
    assert!(is_greeting_line("お疲れ様です。"));
    assert!(is_greeting_line("拝啓、時下ますますご清栄のこととお慶び申し上げます"));
    assert!(is_greeting_line("ご無沙汰しております。"));
    assert!(is_greeting_line("初めてご連絡いたします。"));
    assert!(is_greeting_line("突然のご連絡失礼いたします。"));
}

#[test]
fn test_addressee_greetings() {
    assert!(is_greeting_line("田中様"));
    assert!(is_greeting_line("鈴木さん、"));
    assert!(is_greeting_line("株式会社テスト 御中"));
}

#[test]
fn test_thanks_as_greeting() {
    assert!(is_greeting_line("ご連絡ありがとうございます。"));
    assert!(is_greeting_line("ご返信をありがとうございました。"));
}

#[test]
fn test_body_is_not_greeting() {
    assert!(!is_greeting_line("資料を添付いたします。"));
    assert!(!is_greeting_line("会議は15時からです。"));
    assert!(!is_greeting_line(""));
    assert!(!is_greeting_line("   "));
}

// --- closings ---

#[test]
fn test_business_closings() {
    assert!(is_closing_line("よろしくお願いいたします。"));
    assert!(is_closing_line("何卒よろしくお願い申し上げます。"));
    assert!(is_closing_line("ご確認のほど、よろしくお願いいたします。"));
    assert!(is_closing_line("以上、よろしくお願いいたします。"));
    assert!(is_closing_line("引き続きよろしくお願いいたします。"));
    assert!(is_closing_line("お手数ですが、ご対応ください。"));
}

#[test]
fn test_formal_closings() {
    assert!(is_closing_line("敬具"));
    assert!(is_closing_line("草々"));
    assert!(is_closing_line("以上です。"));
    assert!(is_closing_line("以上"));
}

#[test]
fn test_body_is_not_closing() {
    assert!(!is_closing_line("資料を添付いたします。"));
    assert!(!is_closing_line(""));
}

// --- separators ---

#[test]
fn test_plain_separator_runs() {
    assert!(is_separator_line("---"));
    assert!(is_separator_line("=================="));
    assert!(is_separator_line("━━━━━━━━"));
    assert!(is_separator_line("  ___  "));
    assert!(is_separator_line("*****"));
    assert!(is_separator_line("＝＝＝"));
}

#[test]
fn test_decorated_separators() {
    assert!(is_separator_line("★---★"));
    assert!(is_separator_line("☆===☆"));
    assert!(is_separator_line("★★★★★"));
}

#[test]
fn test_short_runs_are_not_separators() {
    assert!(!is_separator_line("--"));
    assert!(!is_separator_line("★-★"));
    assert!(!is_separator_line("★"));
}

#[test]
fn test_prose_is_not_separator() {
    assert!(!is_separator_line("お世話になっております。"));
    assert!(!is_separator_line("詳細は---をご確認ください"));
    assert!(!is_separator_line(""));
    assert!(!is_separator_line("   "));
}

// --- contact info ---

#[test]
fn test_phone_and_fax_lines() {
    assert!(is_contact_info_line("TEL: 03-1234-5678"));
    assert!(is_contact_info_line("Tel：03-1234-5678"));
    assert!(is_contact_info_line("電話: 090-1234-5678"));
    assert!(is_contact_info_line("FAX: 03-1234-5679"));
    assert!(is_contact_info_line("携帯: 080-1111-2222"));
    assert!(is_contact_info_line("03-1234-5678"));
}

#[test]
fn test_email_and_url_lines() {
    assert!(is_contact_info_line("Email: yamada@example.co.jp"));
    assert!(is_contact_info_line("yamada@example.co.jp"));
    assert!(is_contact_info_line("https://www.example.co.jp"));
    assert!(is_contact_info_line("www.example.co.jp"));
    assert!(is_contact_info_line("URL: http://example.jp"));
}

#[test]
fn test_postal_lines() {
    assert!(is_contact_info_line("〒100-0001 東京都千代田区"));
    assert!(is_contact_info_line("〒1000001"));
    assert!(is_contact_info_line("住所: 東京都千代田区1-2-3"));
}

#[test]
fn test_plain_text_is_not_contact() {
    assert!(!is_contact_info_line("資料を添付いたします。"));
    assert!(!is_contact_info_line("明日の14時に伺います。"));
    assert!(!is_contact_info_line(""));
}

// --- company ---

#[test]
fn test_company_lines() {
    assert!(is_company_line("株式会社テスト"));
    assert!(is_company_line("テスト有限会社"));
    assert!(is_company_line("(株)サンプル"));
    assert!(is_company_line("Example Inc."));
    assert!(is_company_line("Sample Co., Ltd."));
}

#[test]
fn test_non_company_lines() {
    assert!(!is_company_line("資料を添付いたします。"));
    assert!(!is_company_line(""));
}

// --- positions ---

#[test]
fn test_position_lines() {
    assert!(is_position_line("営業部 部長"));
    assert!(is_position_line("代表取締役 山田太郎"));
    assert!(is_position_line("プロジェクトマネージャー"));
    assert!(is_position_line("Sales Manager"));
}

#[test]
fn test_non_position_lines() {
    assert!(!is_position_line("資料を添付いたします。"));
    assert!(!is_position_line(""));
}

// --- names ---

#[test]
fn test_name_with_reading() {
    assert!(is_name_line("田中太郎 (タナカタロウ)"));
    assert!(is_name_line("中村次郎(ナカムラジロウ)"));
}

#[test]
fn test_name_with_romaji() {
    assert!(is_name_line("田中太郎 / Taro Tanaka"));
    assert!(is_name_line("田中 / Tanaka"));
}

#[test]
fn test_romaji_name() {
    assert!(is_name_line("Taro Tanaka"));
    assert!(!is_name_line("HELLO WORLD"));
}

#[test]
fn test_known_name_lines() {
    assert!(is_name_line("田中"));
    assert!(is_name_line("田中太郎"));
    assert!(is_name_line("タナカ"));
}

#[test]
fn test_sentences_are_not_name_lines() {
    assert!(!is_name_line("田中さんに資料を送りました。"));
    assert!(!is_name_line("本日はありがとうございました。"));
    assert!(!is_name_line(""));
}

#[test]
fn test_contains_known_name() {
    assert!(contains_known_name("担当: 田中"));
    assert!(contains_known_name("営業部 タナカ"));
    assert!(contains_known_name("Contact: tanaka@example.com"));
    assert!(!contains_known_name("資料を添付いたします。"));
}

// --- meta discussion ---

#[test]
fn test_meta_discussion_markers() {
    assert!(has_meta_discussion("例えば以下のような形です。"));
    assert!(has_meta_discussion("下記の日程でお願いします。"));
    assert!(has_meta_discussion("サンプルを添付します。"));
    assert!(!has_meta_discussion("資料を送ります。"));
}
