use super::config::{PlaceholderStyle, RenderStyle};
use super::ident::quote_ident;
use super::keyword::Keyword;
use crate::param::Param;

pub struct SqlWriter<'s> {
    pub buf: String,
    pub params: Vec<Param>,
    pub next_param_idx: usize, // 1-based для $1/$2..., игнорится при '?'
    pub style: &'s RenderStyle,
}

impl<'s> SqlWriter<'s> {
    pub fn new(cap: usize, style: &'s RenderStyle) -> Self {
        Self {
            buf: String::with_capacity(cap),
            params: Vec::new(),
            next_param_idx: 1,
            style,
        }
    }

    #[inline]
    pub fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    #[inline]
    pub fn push_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Ключевое слово в регистре из стиля
    #[inline]
    pub fn push_kw(&mut self, kw: Keyword) {
        let text = kw.render(self.style.case_style);
        self.buf.push_str(&text);
    }

    /// Идентификатор с квотированием по стилю
    #[inline]
    pub fn push_ident(&mut self, name: &str) {
        let quoted = quote_ident(name, self.style);
        self.buf.push_str(&quoted);
    }

    /// Вставляет плейсхолдер (увеличивая счётчик при Numbered)
    pub fn push_placeholder(&mut self) {
        match self.style.placeholders {
            PlaceholderStyle::Question => self.push("?"),
            PlaceholderStyle::Numbered => {
                let i = self.next_param_idx;
                self.next_param_idx += 1;
                // $1, $2...
                self.buf.push('$');
                self.push_u64(i as u64);
            }
        }
    }

    /// Плейсхолдер + значение в список параметров, порядок совпадает
    pub fn push_param(&mut self, p: Param) {
        self.push_placeholder();
        self.params.push(p);
    }

    pub fn finish(self) -> (String, Vec<Param>) {
        (self.buf, self.params)
    }

    #[inline]
    pub fn push_u64(&mut self, v: u64) {
        use itoa::Buffer;
        let mut buf = Buffer::new();
        self.buf.push_str(buf.format(v));
    }

    #[inline]
    pub fn push_sep(&mut self, i: usize, sep: &str) {
        if i > 0 {
            self.buf.push_str(sep);
        }
    }
}
