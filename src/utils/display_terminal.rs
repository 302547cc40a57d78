//! 터미널 출력 포맷팅 유틸리티
//!
//! 시작 시 부트스트랩 진행 상황과 결과 요약을 터미널에 표시합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 (박스 내부 콘텐츠)
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Roles ensured (3 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 트리 형태로 표시합니다
///
/// ```text
///    ├─ SystemAdministrator: created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 부트스트랩 결과 요약을 출력합니다
///
/// # Arguments
///
/// * `roles` - 설정된 전체 역할 목록
/// * `roles_created` - 이번 실행에서 새로 만든 역할
/// * `admin_email` - 기본 관리자 이메일
/// * `admin_created` - 이번 실행에서 기본 관리자를 만들었는지 여부
///
/// ```text
/// ✓ Step 1: Roles ensured (3 items)
///    ├─ SystemAdministrator: created
///    ├─ Agent: exists
///    ├─ User: exists
/// ✓ Step 2: Default administrator ensured (1 items)
///    ├─ admin@autoestate.com: exists
///
/// ╔══════════════════════════════════════════════════╗
/// ║            🔐 IDENTITY BOOTSTRAP COMPLETE         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_bootstrap_summary(
    roles: &[String],
    roles_created: &[String],
    admin_email: &str,
    admin_created: bool,
) {
    print_step_complete(1, "Roles ensured", roles.len());
    for role in roles {
        let status = if roles_created.contains(role) { "created" } else { "exists" };
        print_sub_task(role, status);
    }

    print_step_complete(2, "Default administrator ensured", 1);
    print_sub_task(admin_email, if admin_created { "created" } else { "exists" });

    println!();
    print_boxed_title("🔐 IDENTITY BOOTSTRAP COMPLETE");
    println!();
}
