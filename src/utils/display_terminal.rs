//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 설정 요약을 박스 형태로 출력합니다.

use crate::config::Environment;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              Token Service Started               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    for line in boxed_title(title) {
        println!("{}", line);
    }
}

/// 서버 시작 요약을 출력합니다
///
/// 시크릿 값은 절대 출력하지 않습니다.
///
/// Output:
/// ```text
///    ├─ Bind: 0.0.0.0:8080
///    ├─ Environment: Production
///    ├─ Secure cookies: true
/// ```
pub fn print_startup_summary(bind_address: &str, environment: &Environment, secure_cookies: bool) {
    println!();
    print_boxed_title("🔐 ANDROID INTERNALS AUTH");
    print_sub_task("Bind", bind_address);
    print_sub_task("Environment", &format!("{:?}", environment));
    print_sub_task("Secure cookies", &secure_cookies.to_string());
    println!();
}

/// 서브 항목을 트리 형태로 출력합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

fn boxed_title(title: &str) -> [String; 3] {
    // 고정 너비 50칸 (박스 내부 콘텐츠)
    let border = "═".repeat(50);
    [
        format!("╔{}╗", border),
        format!("║{:^50}║", title),
        format!("╚{}╝", border),
    ]
}
