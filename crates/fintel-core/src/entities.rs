//! Korean financial-sector entity reference list.
//!
//! Embedded into the analysis prompt so the model can resolve vague
//! mentions ("K뱅크 또 터짐") to concrete institutions. Grouped by
//! sector; the final line carries generic Korea markers for posts that
//! name the country but not the institution.

pub const KOREAN_FINANCIAL_ENTITIES: &str = "\
- Banks: 국민은행, 신한은행, 하나은행, 우리은행, 농협, NH, IBK기업은행, SC제일은행, 케이뱅크, 카카오뱅크, 토스뱅크
- Brokerages: 삼성증권, 미래에셋, 한국투자증권, NH투자증권, KB증권, 키움증권, 대신증권
- Insurers: 삼성생명, 삼성화재, 현대해상, DB손해보험, 한화생명, 교보생명, 메리츠화재
- Card issuers: 삼성카드, 신한카드, 현대카드, 롯데카드, 하나카드, 우리카드, BC카드
- Fintech: 카카오페이, 네이버페이, 토스, 페이코, 쿠팡페이
- Regulators: 금융감독원, 금융위원회, 한국은행, 예금보험공사, 금융결제원, 코스콤
- Crypto exchanges: 업비트, 빗썸, 코인원, 코빗
- Generic markers: 한국, Korea, KR, .kr, Korean bank, Korean financial
";
