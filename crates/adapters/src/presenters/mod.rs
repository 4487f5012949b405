use lite_gallery_domain::ImageRecord;

pub fn present_record_row(record: &ImageRecord) -> String {
    format!(
        "{}\t{}\t{}",
        record.id,
        image_kind_from_uri(&record.uri),
        record.uri
    )
}

fn image_kind_from_uri(uri: &str) -> &'static str {
    match uri
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
    {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "JPEG",
        Some(ext) if ext == "png" => "PNG",
        Some(ext) if ext == "gif" || ext == "webp" || ext == "bmp" => "IMAGE",
        _ => "UNKNOWN",
    }
}
