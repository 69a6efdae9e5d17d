use rs_htmlextract::encoding::{decode_html, repair_mojibake, EncodingSource};

#[test]
fn utf8_content_handled_correctly() {
    let html = "<html><head><meta charset=\"utf-8\"></head>\
        <body><p>é, ñ, ü, 中文</p></body></html>"
        .as_bytes();

    let decoded = decode_html(html);
    assert!(decoded.text.contains("é, ñ, ü, 中文"));
    assert_eq!(decoded.source, EncodingSource::Declared);
    assert!(!decoded.had_errors);
}

#[test]
fn iso88591_converted_to_utf8() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
        <body><h1>Caf\xE9 espa\xF1ol</h1><p>M\xFCnchen</p></body></html>";

    let decoded = decode_html(html);
    assert!(decoded.text.contains("Café español"));
    assert!(decoded.text.contains("München"));
}

#[test]
fn windows1252_smart_quotes() {
    let html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head>\
        <body><p>\x93Smart quotes\x94</p></body></html>";

    let decoded = decode_html(html);
    assert!(decoded.text.contains("\u{201C}Smart quotes\u{201D}"));
}

#[test]
fn undeclared_gb2312_is_sniffed() {
    // "本地新闻" in GB2312
    let html = b"<p>\xB1\xBE\xB5\xD8\xD0\xC2\xCE\xC5</p>";

    let decoded = decode_html(html);
    assert_eq!(decoded.text, "<p>本地新闻</p>");
    assert_eq!(decoded.source, EncodingSource::Sniffed);
    assert_eq!(decoded.encoding.name(), "gb18030");
}

#[test]
fn undeclared_utf8_preferred() {
    let decoded = decode_html("<p>新闻</p>".as_bytes());
    assert_eq!(decoded.encoding.name(), "UTF-8");
    assert_eq!(decoded.text, "<p>新闻</p>");
}

#[test]
fn mojibake_repair_round_trip() {
    let garbled: String = "新闻 Café".bytes().map(char::from).collect();
    assert_eq!(repair_mojibake(&garbled), Some("新闻 Café".to_string()));
    assert_eq!(repair_mojibake("already fine"), None);
    assert_eq!(repair_mojibake("新闻"), None);
}
