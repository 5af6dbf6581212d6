#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdApi {
    Txt2Img,
    Img2Img,
}

impl SdApi {
    pub fn value(&self) -> &'static str {
        match *self {
            SdApi::Txt2Img => "txt2img",
            SdApi::Img2Img => "img2img",
        }
    }
}
