use crate::args::Args;
use crate::node::Node;
use crate::parsing::Expander;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Iframe,
}

/// An embedded image, video, or frame.
///
/// The source is the tag content. Images also accept the first positional
/// argument as an override; video takes its positional tokens as flags.
/// `width=` and `height=` size the element; the remaining fields only apply
/// to the kind that reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub kind: MediaKind,
    pub src: String,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Image only.
    pub alt: Option<String>,
    /// Iframe only.
    pub title: Option<String>,
    /// Video only.
    pub autoplay: bool,
    pub looped: bool,
    pub muted: bool,
}

impl Media {
    pub fn from_tag(kind: MediaKind, content: &str, args: &Args) -> Self {
        let owned = |v: Option<&str>| v.map(str::to_string);
        let is_video = kind == MediaKind::Video;
        let src = match kind {
            MediaKind::Image => args.positional(0).unwrap_or(content),
            MediaKind::Video | MediaKind::Iframe => content,
        };

        Self {
            kind,
            src: src.to_string(),
            width: owned(args.keyed("width")),
            height: owned(args.keyed("height")),
            alt: owned(args.keyed("alt")).filter(|_| kind == MediaKind::Image),
            title: owned(args.keyed("title")).filter(|_| kind == MediaKind::Iframe),
            autoplay: is_video && args.has_flag("autoplay"),
            looped: is_video && args.has_flag("loop"),
            muted: is_video && args.has_flag("muted"),
        }
    }

    /// Inline CSS for the sizing arguments, if any were given.
    pub fn sizing_style(&self) -> Option<String> {
        let mut style = String::new();
        if let Some(width) = &self.width {
            style.push_str(&format!("width: {width};"));
        }
        if let Some(height) = &self.height {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(&format!("height: {height};"));
        }
        (!style.is_empty()).then_some(style)
    }

    pub fn into_node(self) -> Node {
        let style = self.sizing_style();
        match self.kind {
            // The container carries the size; the image fills it.
            MediaKind::Image => {
                let mut img = Node::new("img").with_attr("src", self.src);
                if let Some(alt) = self.alt {
                    img.set_attr("alt", alt);
                }
                let mut container = Node::new("doki-image");
                if let Some(style) = style {
                    container.set_attr("style", style);
                }
                container.with_child(img)
            }
            MediaKind::Video => {
                let mut video = Node::new("video")
                    .with_attr("src", self.src)
                    .with_attr("controls", "");
                if let Some(style) = style {
                    video.set_attr("style", style);
                }
                for (flag, on) in [
                    ("autoplay", self.autoplay),
                    ("loop", self.looped),
                    ("muted", self.muted),
                ] {
                    if on {
                        video.set_attr(flag, "");
                    }
                }
                Node::new("doki-video").with_child(video)
            }
            MediaKind::Iframe => {
                let mut iframe = Node::new("iframe").with_attr("src", self.src);
                if let Some(style) = style {
                    iframe.set_attr("style", style);
                }
                if let Some(title) = self.title {
                    iframe.set_attr("title", title);
                }
                Node::new("doki-iframe").with_child(iframe)
            }
        }
    }
}

pub fn image(_: &Expander<'_>, content: &str, args: &Args) -> Node {
    Media::from_tag(MediaKind::Image, content, args).into_node()
}

pub fn video(_: &Expander<'_>, content: &str, args: &Args) -> Node {
    Media::from_tag(MediaKind::Video, content, args).into_node()
}

pub fn iframe(_: &Expander<'_>, content: &str, args: &Args) -> Node {
    Media::from_tag(MediaKind::Iframe, content, args).into_node()
}
