use crate::models::DepartmentCode;

/// One locale's compiled-in string pack: chat prompts, notices, and the
/// label lists the select-style steps and the label codec share.
///
/// The department list pairs every label with its backend code so the two
/// can never drift apart; the codec looks labels up in this table.
pub struct Messages {
    pub welcome: &'static str,
    pub ask_name: &'static str,
    pub ask_phone: &'static str,
    pub ask_department: &'static str,
    pub ask_symptoms: &'static str,
    pub ask_city: &'static str,
    pub ask_date: &'static str,
    pub ask_time: &'static str,
    pub ask_language: &'static str,
    pub confirmation: &'static str,
    pub complete: &'static str,
    pub auth_required: &'static str,
    pub submit_failed: &'static str,

    pub departments: &'static [(&'static str, DepartmentCode)],
    /// Time-slot labels, ordered morning / afternoon / no preference.
    pub times: [&'static str; 3],
    /// Interpretation-language labels, ordered Korean / English / Vietnamese.
    pub languages: [&'static str; 3],
    /// Booking status labels, ordered pending / confirmed / completed / cancelled.
    pub statuses: [&'static str; 4],
}

pub static KO: Messages = Messages {
    welcome: "안녕하세요! 진료 예약을 도와드릴게요. 몇 가지만 여쭤보겠습니다.",
    ask_name: "성함을 알려주세요.",
    ask_phone: "연락 가능한 전화번호를 알려주세요.",
    ask_department: "어느 진료과를 원하시나요?",
    ask_symptoms: "증상을 자세히 설명해주세요.",
    ask_city: "어느 도시에 계신가요?",
    ask_date: "원하시는 진료 날짜를 선택해주세요.",
    ask_time: "원하시는 시간대를 선택해주세요.",
    ask_language: "진료 시 통역이 필요한 언어를 선택해주세요.",
    confirmation: "입력하신 내용을 확인해주세요. 아래에서 예약을 확정할 수 있습니다.",
    complete: "예약 요청이 접수되었습니다! 상담원이 확인 후 연락드리겠습니다.",
    auth_required: "안녕하세요! 예약을 진행하려면 먼저 매직 링크 인증이 필요합니다. 인증 후 다시 시도해주세요.",
    submit_failed: "예약 저장 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",

    departments: &[
        ("모름", DepartmentCode::Unknown),
        ("내과", DepartmentCode::Internal),
        ("외과", DepartmentCode::Surgery),
        ("소아과", DepartmentCode::Pediatrics),
        ("산부인과", DepartmentCode::Obgyn),
        ("정형외과", DepartmentCode::Orthopedics),
        ("피부과", DepartmentCode::Derm),
        ("안과", DepartmentCode::Ophthalmology),
        ("이비인후과", DepartmentCode::Ent),
        ("정신건강의학과", DepartmentCode::Psychiatry),
        ("성형외과", DepartmentCode::Plastic),
        ("치과", DepartmentCode::Dent),
        ("기타", DepartmentCode::Other),
    ],
    times: ["오전 (09:00-12:00)", "오후 (13:00-18:00)", "상관없음"],
    languages: ["한국어", "영어", "베트남어"],
    statuses: ["대기중", "확인됨", "완료됨", "취소됨"],
};

pub static EN: Messages = Messages {
    welcome: "Hello! I can help you book a clinic appointment. I just need a few details.",
    ask_name: "What is your name?",
    ask_phone: "What phone number can we reach you at?",
    ask_department: "Which department would you like to visit?",
    ask_symptoms: "Please describe your symptoms in detail.",
    ask_city: "Which city are you in?",
    ask_date: "Please pick a preferred appointment date.",
    ask_time: "Which time of day works best for you?",
    ask_language: "Which language would you like interpretation in?",
    confirmation: "Please review your details below and confirm the booking.",
    complete: "Your booking request has been received! A consultant will contact you shortly.",
    auth_required: "Hello! Magic link authentication is required to proceed with booking. Please authenticate and try again.",
    submit_failed: "Failed to save your booking. Please try again.",

    departments: &[
        ("Not sure", DepartmentCode::Unknown),
        ("Internal Medicine", DepartmentCode::Internal),
        ("General Surgery", DepartmentCode::Surgery),
        ("Pediatrics", DepartmentCode::Pediatrics),
        ("Obstetrics & Gynecology", DepartmentCode::Obgyn),
        ("Orthopedics", DepartmentCode::Orthopedics),
        ("Dermatology", DepartmentCode::Derm),
        ("Ophthalmology", DepartmentCode::Ophthalmology),
        ("Otolaryngology (ENT)", DepartmentCode::Ent),
        ("Psychiatry", DepartmentCode::Psychiatry),
        ("Plastic Surgery", DepartmentCode::Plastic),
        ("Dentistry", DepartmentCode::Dent),
        ("Other", DepartmentCode::Other),
    ],
    times: ["Morning (09:00-12:00)", "Afternoon (13:00-18:00)", "Any time"],
    languages: ["Korean", "English", "Vietnamese"],
    statuses: ["Pending", "Confirmed", "Completed", "Cancelled"],
};

pub static VI: Messages = Messages {
    welcome: "Xin chào! Tôi có thể giúp bạn đặt lịch khám. Chỉ cần vài thông tin thôi.",
    ask_name: "Bạn tên là gì?",
    ask_phone: "Số điện thoại liên lạc của bạn là gì?",
    ask_department: "Bạn muốn khám ở khoa nào?",
    ask_symptoms: "Vui lòng mô tả chi tiết triệu chứng của bạn.",
    ask_city: "Bạn đang ở thành phố nào?",
    ask_date: "Vui lòng chọn ngày khám mong muốn.",
    ask_time: "Bạn muốn khám vào khung giờ nào?",
    ask_language: "Bạn cần phiên dịch sang ngôn ngữ nào?",
    confirmation: "Vui lòng kiểm tra thông tin bên dưới và xác nhận đặt lịch.",
    complete: "Yêu cầu đặt lịch của bạn đã được ghi nhận! Tư vấn viên sẽ sớm liên hệ với bạn.",
    auth_required: "Xin chào! Cần xác thực Magic Link để tiếp tục đặt lịch. Vui lòng xác thực và thử lại.",
    submit_failed: "Lưu lịch hẹn thất bại. Vui lòng thử lại.",

    departments: &[
        ("Chưa rõ", DepartmentCode::Unknown),
        ("Nội khoa", DepartmentCode::Internal),
        ("Ngoại khoa", DepartmentCode::Surgery),
        ("Nhi khoa", DepartmentCode::Pediatrics),
        ("Sản phụ khoa", DepartmentCode::Obgyn),
        ("Chấn thương chỉnh hình", DepartmentCode::Orthopedics),
        ("Da liễu", DepartmentCode::Derm),
        ("Nhãn khoa", DepartmentCode::Ophthalmology),
        ("Tai mũi họng", DepartmentCode::Ent),
        ("Tâm thần", DepartmentCode::Psychiatry),
        ("Phẫu thuật thẩm mỹ", DepartmentCode::Plastic),
        ("Nha khoa", DepartmentCode::Dent),
        ("Khác", DepartmentCode::Other),
    ],
    times: [
        "Buổi sáng (09:00-12:00)",
        "Buổi chiều (13:00-18:00)",
        "Bất kỳ lúc nào",
    ],
    languages: ["Tiếng Hàn", "Tiếng Anh", "Tiếng Việt"],
    statuses: ["Đang chờ", "Đã xác nhận", "Hoàn tất", "Đã hủy"],
};
