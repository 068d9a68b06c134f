use crate::properties::ccc;

/// каноническое упорядочивание: нестартеры между стартерами сортируются по CCC,
/// кодпоинты с одинаковым CCC сохраняют свой порядок. стартеры не перемещаются
pub fn canonical_order(buffer: &mut [u32])
{
    let mut i = 1;

    while i < buffer.len() {
        let code = buffer[i];
        let class = ccc(code);

        if class != 0 {
            let mut j = i;

            // сортировка вставками: сдвигаем вправо нестартеры с большим CCC
            while j > 0 {
                let previous = ccc(buffer[j - 1]);

                if previous <= class {
                    break;
                }

                buffer[j] = buffer[j - 1];
                j -= 1;
            }

            buffer[j] = code;
        }

        i += 1;
    }
}
