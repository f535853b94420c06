//! Static catalog of result cards shown below the parameter form.

/// One result card: a heading and the label drawn inside its chart box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultPanel {
    pub title: &'static str,
    pub placeholder: &'static str,
}

impl ResultPanel {
    /// Text rendered inside the placeholder box.
    pub fn placeholder_text(&self) -> String {
        format!("{} 차트", self.placeholder)
    }
}

pub const RESULT_PANELS: [ResultPanel; 7] = [
    ResultPanel { title: "연도별 분포", placeholder: "연도별 분포" },
    ResultPanel { title: "저널별 분포", placeholder: "저널별 분석" },
    ResultPanel { title: "카테고리 분포", placeholder: "카테고리별 분포" },
    ResultPanel { title: "키워드 워드클라우드", placeholder: "키워드 네트워크" },
    ResultPanel { title: "다빈도 키워드", placeholder: "감성 분석" },
    ResultPanel { title: "다빈도 식품군", placeholder: "토픽 모델링" },
    ResultPanel { title: "지역별 분포", placeholder: "주요 엔티티" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let titles: Vec<&str> = RESULT_PANELS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "연도별 분포",
                "저널별 분포",
                "카테고리 분포",
                "키워드 워드클라우드",
                "다빈도 키워드",
                "다빈도 식품군",
                "지역별 분포",
            ]
        );
    }

    #[test]
    fn test_placeholder_text() {
        assert_eq!(RESULT_PANELS[1].placeholder_text(), "저널별 분석 차트");
    }
}
