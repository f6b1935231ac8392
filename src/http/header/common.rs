use super::IntoHeader;
use crate::http::ByteStr;

/// HTTP Content-Types.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentType {
    Jpeg,
    Png,
    Json,
    Xml,
    Html,
    Text,
    FormData,
    FormUrlEncoded,
    OctetStream,
    Other(mime::Mime),
}

impl ContentType {
    pub fn mime(&self) -> &mime::Mime {
        match self {
            ContentType::Jpeg => &mime::IMAGE_JPEG,
            ContentType::Png => &mime::IMAGE_PNG,
            ContentType::Json => &mime::APPLICATION_JSON,
            ContentType::Xml => &mime::TEXT_XML,
            ContentType::Html => &mime::TEXT_HTML_UTF_8,
            ContentType::Text => &mime::TEXT_PLAIN_UTF_8,
            ContentType::FormData => &mime::MULTIPART_FORM_DATA,
            ContentType::FormUrlEncoded => &mime::APPLICATION_WWW_FORM_URLENCODED,
            ContentType::OctetStream => &mime::APPLICATION_OCTET_STREAM,
            ContentType::Other(mime) => mime,
        }
    }
}

impl IntoHeader for ContentType {
    fn into_header(self) -> (ByteStr, ByteStr) {
        (
            ByteStr::from_static("Content-Type"),
            ByteStr::from(self.mime().as_ref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_values() {
        let (name, value) = ContentType::Html.into_header();
        assert_eq!(name, "Content-Type");
        assert_eq!(value, "text/html; charset=utf-8");

        let svg: mime::Mime = "image/svg+xml".parse().unwrap();
        assert_eq!(ContentType::Other(svg).into_header().1, "image/svg+xml");
    }
}
