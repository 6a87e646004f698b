//! Prompt construction for the delegated `lesson_analysis` profile

/// Build the lesson-analysis prompt around a normalized transcript
///
/// The instructions pin the backend to a bare JSON object matching the
/// lesson schema; the schema itself travels separately as a CLI flag.
pub fn build_lesson_prompt(transcript: &str) -> String {
    format!(
        "\
Ты анализируешь транскрипт урока и должен вернуть ТОЛЬКО JSON по заданной схеме.
Важные правила:
1) Никакого markdown, только валидный JSON-объект.
2) Заполняй все обязательные поля.
3) Не добавляй дополнительные поля.
4) Если данных мало, используй null или короткие списки, но сохрани типы.
5) Для theory_practice_balance: проценты от 0 до 100, сумма ровно 100.
6) Язык ответа: русский (допускаются технические англ. термины из исходного текста).
7) practical_activities и homework должны быть конкретными и привязанными к содержанию транскрипта.

ТРАНСКРИПТ УРОКА:
{transcript}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_transcript() {
        let prompt = build_lesson_prompt("Сегодня разбираем борроу-чекер.");
        assert!(prompt.contains("Сегодня разбираем борроу-чекер."));
        assert!(prompt.ends_with("Сегодня разбираем борроу-чекер."));
    }

    #[test]
    fn test_prompt_states_contract_rules() {
        let prompt = build_lesson_prompt("текст");
        assert!(prompt.contains("ТОЛЬКО JSON"));
        assert!(prompt.contains("theory_practice_balance"));
        assert!(prompt.contains("сумма ровно 100"));
    }
}
